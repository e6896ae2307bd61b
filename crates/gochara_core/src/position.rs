//! Sidereal position and lunar/planetary phase values.

use gochara_vedic::{Dms, House, NakshatraPosition, deg_to_dms, nakshatra_position};

/// A sidereal ecliptic position.
///
/// The longitude is always present; latitude, distance, and speed are
/// populated for bodies and absent for computed points such as the
/// ascendant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Sidereal longitude in degrees, [0, 360).
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: Option<f64>,
    /// Distance in AU.
    pub distance: Option<f64>,
    /// Longitudinal speed in deg/day (negative = retrograde for
    /// ordinary bodies).
    pub speed: Option<f64>,
}

impl Position {
    /// A longitude-only position (ascendant and other computed points).
    pub fn longitude_only(longitude: f64) -> Self {
        Self {
            longitude,
            latitude: None,
            distance: None,
            speed: None,
        }
    }

    /// The sign holding this longitude.
    pub fn house(&self) -> House {
        House::from_longitude(self.longitude)
    }

    /// Sign plus the DMS offset into it.
    pub fn house_position(&self) -> (House, Dms) {
        let house = self.house();
        let offset = self.longitude.rem_euclid(360.0) - house.index() as f64 * 30.0;
        (house, deg_to_dms(offset))
    }

    /// The nakshatra holding this longitude.
    pub fn nakshatra(&self) -> NakshatraPosition {
        nakshatra_position(self.longitude)
    }
}

/// Illumination figures of a body as seen from the birth place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    /// Signed elongation from the Sun in degrees, (-180, 180].
    pub elongation_deg: f64,
    /// Phase angle (Sun–body–observer) in degrees.
    pub phase_angle_deg: f64,
    /// Fraction of the disk illuminated, [0, 1].
    pub illuminated_fraction: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gochara_vedic::Nakshatra;

    #[test]
    fn house_decomposition() {
        let p = Position::longitude_only(319.27);
        let (house, dms) = p.house_position();
        assert_eq!(house, House::Aquarius);
        assert_eq!(dms.degrees, 19);
        assert_eq!(dms.minutes, 16);
    }

    #[test]
    fn nakshatra_lookup() {
        let p = Position::longitude_only(319.27);
        assert_eq!(p.nakshatra().nakshatra, Nakshatra::Shatabhisha);
    }

    #[test]
    fn longitude_only_has_no_motion_fields() {
        let p = Position::longitude_only(12.0);
        assert!(p.latitude.is_none());
        assert!(p.distance.is_none());
        assert!(p.speed.is_none());
    }
}
