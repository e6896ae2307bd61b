//! Ephemeris adapter: the birth-chart context every query runs against.
//!
//! An [`Ephemeris`] owns the birth instant (converted from local time),
//! the [`Place`], the [`ChartConfig`], and a private oracle instance. It
//! answers single-instant questions (sidereal positions, the ascendant,
//! phase) and provides the sampling primitives the search crate builds
//! on.
//!
//! The oracle keeps per-instance state, so an `Ephemeris` must not be
//! shared across threads; the sharded driver gives every worker its own
//! adapter via [`Ephemeris::fresh`]. Oracle warnings are logged at
//! `Warn` (subject to the per-adapter `log_level`) and never alter
//! results.

pub mod ayanamsha;
pub mod config;
pub mod error;
pub mod place;
pub mod position;

use analytic_kernel::{AnalyticKernel, EclipticState};
use analytic_kernel::frames::{normalize_360, normalize_pm180};
use chrono::{NaiveDateTime, TimeDelta, TimeZone, Utc};
use gochara_time::{Instant, Interval, jd_from_instant, julian_centuries};
use gochara_vedic::Body;
use log::LevelFilter;

pub use ayanamsha::{ALL_AYANAMSHAS, Ayanamsha, ayanamsha_deg, ayanamsha_rate_deg_per_day};
pub use config::{ChartConfig, FringePolicy};
pub use error::EphemerisError;
pub use place::Place;
pub use position::{Phase, Position};

/// Birth-chart context plus a private oracle handle.
#[derive(Debug)]
pub struct Ephemeris {
    birth_local: NaiveDateTime,
    birth_utc: Instant,
    place: Place,
    config: ChartConfig,
    kernel: AnalyticKernel,
}

impl Ephemeris {
    /// Build a chart for a local birth time at a place. The local time is
    /// converted to UTC by subtracting the place's offset.
    pub fn new(
        birth_local: NaiveDateTime,
        place: Place,
        config: ChartConfig,
    ) -> Result<Self, EphemerisError> {
        config.validate()?;
        let offset = TimeDelta::seconds(place.utc_offset().local_minus_utc() as i64);
        let birth_utc = Utc.from_utc_datetime(&(birth_local - offset));
        Ok(Self {
            birth_local,
            birth_utc,
            place,
            config,
            kernel: AnalyticKernel::new(),
        })
    }

    /// A new adapter on the same birth, place, and configuration, with
    /// its own oracle instance. Sharded workers each call this so oracle
    /// state never crosses a thread boundary.
    pub fn fresh(&self) -> Ephemeris {
        Ephemeris {
            birth_local: self.birth_local,
            birth_utc: self.birth_utc,
            place: self.place.clone(),
            config: self.config.clone(),
            kernel: AnalyticKernel::new(),
        }
    }

    pub fn birth(&self) -> Instant {
        self.birth_utc
    }

    pub fn place(&self) -> &Place {
        &self.place
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Julian Day of the birth instant.
    pub fn julian_day(&self) -> Result<f64, EphemerisError> {
        self.julian_day_at(self.birth_utc)
    }

    /// Julian Day of an arbitrary instant, validated against the
    /// oracle's epoch windows.
    pub fn julian_day_at(&self, t: Instant) -> Result<f64, EphemerisError> {
        let jd = jd_from_instant(t);
        if let Some(warning) = analytic_kernel::validate_epoch(jd)? {
            self.warn(format_args!("oracle: {warning} (JD {jd:.4})"));
        }
        Ok(jd)
    }

    /// Sidereal position of a body at the birth instant.
    pub fn position(&self, body: Body) -> Result<Position, EphemerisError> {
        self.position_at(body, self.birth_utc)
    }

    /// Sidereal topocentric position of a body at an instant.
    pub fn position_at(&self, body: Body, t: Instant) -> Result<Position, EphemerisError> {
        let jd = jd_from_instant(t);
        let state = self.tropical_state(body, jd)?;
        Ok(self.to_sidereal(state, jd))
    }

    /// Positions at an explicit list of instants, in input order.
    pub fn positions(
        &self,
        body: Body,
        instants: &[Instant],
    ) -> Result<Vec<(Instant, Position)>, EphemerisError> {
        let mut out = Vec::with_capacity(instants.len());
        for &t in instants {
            out.push((t, self.position_at(body, t)?));
        }
        Ok(out)
    }

    /// Stride-sample positions across an interval: the start is
    /// included, the end is not.
    pub fn positions_during(
        &self,
        body: Body,
        interval: Interval,
        every: TimeDelta,
    ) -> Result<Vec<(Instant, Position)>, EphemerisError> {
        if every <= TimeDelta::zero() {
            return Err(EphemerisError::InvalidDate(
                "sampling stride must be positive",
            ));
        }
        let mut out = Vec::new();
        let mut t = interval.start;
        while t < interval.end {
            out.push((t, self.position_at(body, t)?));
            t += every;
        }
        Ok(out)
    }

    /// Sidereal longitude of the ascendant at birth (longitude only).
    pub fn ascendant(&self) -> Result<Position, EphemerisError> {
        self.ascendant_at(self.birth_utc)
    }

    /// Sidereal longitude of the ascendant at an instant.
    pub fn ascendant_at(&self, t: Instant) -> Result<Position, EphemerisError> {
        let jd = jd_from_instant(t);
        let (tropical, warning) = self.kernel.ascendant_deg(
            jd,
            self.place.latitude_deg(),
            self.place.longitude_deg(),
        )?;
        if let Some(warning) = warning {
            self.warn(format_args!("oracle: {warning} (JD {jd:.4})"));
        }
        let aya = ayanamsha_deg(self.config.ayanamsha, julian_centuries(jd));
        Ok(Position::longitude_only(normalize_360(tropical - aya)))
    }

    /// Illumination figures of a body at the birth instant.
    pub fn phase(&self, body: Body) -> Result<Phase, EphemerisError> {
        let jd = jd_from_instant(self.birth_utc);
        if body == Body::Sun {
            return Ok(Phase {
                elongation_deg: 0.0,
                phase_angle_deg: 0.0,
                illuminated_fraction: 1.0,
            });
        }
        let sun = self.tropical_state(Body::Sun, jd)?;
        let b = self.tropical_state(body, jd)?;

        let elongation = normalize_pm180(b.lon_deg - sun.lon_deg);
        let psi = (b.lat_deg.to_radians().cos() * elongation.to_radians().cos()).acos();
        let phase_angle =
            (sun.dist_au * psi.sin()).atan2(b.dist_au - sun.dist_au * psi.cos());
        Ok(Phase {
            elongation_deg: elongation,
            phase_angle_deg: phase_angle.to_degrees(),
            illuminated_fraction: (1.0 + phase_angle.cos()) / 2.0,
        })
    }

    /// Tropical topocentric state, with the south node derived from the
    /// north node by antipodal inversion. The speed sign stays negated
    /// so "retrograde ⇔ positive speed" holds for both nodes.
    fn tropical_state(&self, body: Body, jd: f64) -> Result<EclipticState, EphemerisError> {
        match body.kernel_code() {
            Some(code) => {
                let site = self.place.geo_point();
                let eval = self.kernel.ecliptic_state(code, jd, Some(&site))?;
                if let Some(warning) = eval.warning {
                    self.warn(format_args!("oracle: {warning} (JD {jd:.4})"));
                }
                Ok(eval.state)
            }
            None => {
                let north = self.tropical_state(Body::NorthNode, jd)?;
                Ok(EclipticState {
                    lon_deg: normalize_360(north.lon_deg + 180.0),
                    lat_deg: -north.lat_deg,
                    dist_au: north.dist_au,
                    lon_speed: -north.lon_speed,
                })
            }
        }
    }

    fn to_sidereal(&self, state: EclipticState, jd: f64) -> Position {
        let t = julian_centuries(jd);
        let aya = ayanamsha_deg(self.config.ayanamsha, t);
        Position {
            longitude: normalize_360(state.lon_deg - aya),
            latitude: Some(state.lat_deg),
            distance: Some(state.dist_au),
            speed: Some(state.lon_speed - ayanamsha_rate_deg_per_day(t)),
        }
    }

    fn warn(&self, args: std::fmt::Arguments<'_>) {
        if self.config.log_level >= LevelFilter::Warn {
            log::warn!("{args}");
        }
    }
}
