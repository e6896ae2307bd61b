//! Geographic birth place.

use analytic_kernel::GeoPoint;
use chrono::FixedOffset;

use crate::error::EphemerisError;

/// An immutable observation site: identifier, fixed UTC offset, and
/// geodetic coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    name: String,
    utc_offset: FixedOffset,
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_m: f64,
}

impl Place {
    /// Construct a validated place. Latitude is signed degrees north,
    /// longitude signed degrees east.
    pub fn new(
        name: impl Into<String>,
        utc_offset: FixedOffset,
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
    ) -> Result<Self, EphemerisError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(EphemerisError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        if !altitude_m.is_finite() {
            return Err(EphemerisError::InvalidLocation("altitude must be finite"));
        }
        Ok(Self {
            name: name.into(),
            utc_offset,
            latitude_deg,
            longitude_deg,
            altitude_m,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    /// The site as the oracle's topocentric observer.
    pub fn geo_point(&self) -> GeoPoint {
        GeoPoint {
            latitude_deg: self.latitude_deg,
            longitude_deg: self.longitude_deg,
            altitude_m: self.altitude_m,
        }
    }
}
