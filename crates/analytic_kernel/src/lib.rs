//! Analytic ephemeris oracle.
//!
//! This crate is the workspace's bundled stand-in for an external
//! high-precision ephemeris library: given a Julian Day (UT) and a
//! compact body code it returns apparent ecliptic longitude, latitude,
//! distance, and longitudinal speed, optionally reduced to a topocentric
//! observer. Everything is computed from closed-form series (no data
//! files): Meeus Ch. 25 for the Sun, the abridged ELP series of Meeus
//! Ch. 47 for the Moon and true node, and the Standish mean elements for
//! Mercury–Saturn. Series arguments are evaluated on terrestrial time
//! via the Espenak-Meeus delta-T polynomials; Earth-rotation quantities
//! stay on the caller's UT.
//!
//! A kernel instance carries a per-instance memo cache behind a
//! `RefCell`, so it is `Send` but deliberately **not `Sync`**: one
//! kernel (and hence one adapter) per thread, which is the contract the
//! sharded search driver relies on.
//!
//! Epochs outside the nominal accuracy window (1800–2050) evaluate with
//! a non-fatal warning; epochs outside the hard validity window
//! (years 1000–3000) are errors.

use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod frames;
pub mod moon;
pub mod planets;
pub mod sun;

use frames::{
    cartesian_to_spherical, delta_t_seconds, ecliptic_to_equatorial, equatorial_to_ecliptic,
    gast_deg, normalize_360, normalize_pm180, spherical_to_cartesian, true_obliquity_deg,
};
use planets::{KM_PER_AU, Planet, geocentric_planet};

/// Compact body codes accepted by the kernel.
pub mod codes {
    pub const SUN: i32 = 0;
    pub const MOON: i32 = 1;
    pub const MERCURY: i32 = 2;
    pub const VENUS: i32 = 3;
    pub const MARS: i32 = 4;
    pub const JUPITER: i32 = 5;
    pub const SATURN: i32 = 6;
    pub const TRUE_NODE: i32 = 11;
}

/// JD of 1000-01-01 (Julian calendar): hard validity floor.
const JD_HARD_MIN: f64 = 2_086_557.5;
/// JD of 3000-01-01 (Gregorian calendar): hard validity ceiling.
const JD_HARD_MAX: f64 = 2_817_787.5;
/// JD of 1800-01-01: nominal accuracy floor (Standish element fit).
const JD_NOMINAL_MIN: f64 = 2_378_496.5;
/// JD of 2050-01-01: nominal accuracy ceiling.
const JD_NOMINAL_MAX: f64 = 2_469_807.5;

/// Step used for the central-difference longitude speed, in days.
const SPEED_STEP_DAYS: f64 = 0.02;

/// Earth equatorial radius in km (topocentric reduction).
const EARTH_RADIUS_KM: f64 = 6_378.137;
/// Polar-to-equatorial radius ratio.
const EARTH_FLATTENING_RATIO: f64 = 0.996_647_19;

/// Kernel failure modes.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum KernelError {
    /// The body code is not served by this kernel.
    UnknownBody(i32),
    /// The epoch falls outside the hard validity window.
    EpochOutOfRange { jd: f64 },
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBody(code) => write!(f, "unknown body code: {code}"),
            Self::EpochOutOfRange { jd } => write!(f, "epoch out of range: JD {jd}"),
        }
    }
}

impl Error for KernelError {}

/// Apparent ecliptic state of a body, true equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticState {
    /// Longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees.
    pub lat_deg: f64,
    /// Distance in AU.
    pub dist_au: f64,
    /// Longitudinal speed in degrees per day (negative = retrograde).
    pub lon_speed: f64,
}

/// A kernel evaluation: the state plus an optional non-fatal warning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub state: EclipticState,
    pub warning: Option<&'static str>,
}

/// Geodetic observer for topocentric reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

type GeoKey = (i32, u64);

/// The analytic oracle. One instance per thread.
#[derive(Debug, Default)]
pub struct AnalyticKernel {
    /// Memo of raw geocentric positions keyed by (body, jd bits).
    cache: RefCell<HashMap<GeoKey, (f64, f64, f64)>>,
}

impl AnalyticKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apparent ecliptic state of `body` at `jd_ut`, geocentric or, when
    /// `site` is given, topocentric.
    pub fn ecliptic_state(
        &self,
        body: i32,
        jd_ut: f64,
        site: Option<&GeoPoint>,
    ) -> Result<Evaluation, KernelError> {
        let warning = check_epoch(jd_ut)?;

        let (lon, lat, dist) = self.position(body, jd_ut, site)?;

        let h = SPEED_STEP_DAYS;
        let (lon_before, _, _) = self.position(body, jd_ut - h, site)?;
        let (lon_after, _, _) = self.position(body, jd_ut + h, site)?;
        let lon_speed = normalize_pm180(lon_after - lon_before) / (2.0 * h);

        Ok(Evaluation {
            state: EclipticState {
                lon_deg: lon,
                lat_deg: lat,
                dist_au: dist,
                lon_speed,
            },
            warning,
        })
    }

    /// Tropical ecliptic longitude of the ascendant at `jd_ut` for a
    /// geodetic site, in degrees.
    pub fn ascendant_deg(
        &self,
        jd_ut: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<(f64, Option<&'static str>), KernelError> {
        let warning = check_epoch(jd_ut)?;
        let t = centuries(jd_ut);
        let eps = true_obliquity_deg(t).to_radians();
        let theta = (gast_deg(jd_ut) + longitude_deg).to_radians();
        let phi = latitude_deg.to_radians();

        let asc = f64::atan2(
            theta.cos(),
            -(theta.sin() * eps.cos() + phi.tan() * eps.sin()),
        );
        Ok((normalize_360(asc.to_degrees()), warning))
    }

    /// Position pipeline: memoized geocentric series, then the optional
    /// topocentric reduction.
    fn position(
        &self,
        body: i32,
        jd_ut: f64,
        site: Option<&GeoPoint>,
    ) -> Result<(f64, f64, f64), KernelError> {
        let geo = self.geocentric(body, jd_ut)?;
        Ok(match site {
            Some(site) => topocentric(geo, jd_ut, site),
            None => geo,
        })
    }

    fn geocentric(&self, body: i32, jd_ut: f64) -> Result<(f64, f64, f64), KernelError> {
        let key = (body, jd_ut.to_bits());
        if let Some(&hit) = self.cache.borrow().get(&key) {
            return Ok(hit);
        }

        // Series arguments run on terrestrial time; only Earth-rotation
        // quantities (sidereal time, hour angle) stay on UT.
        let t = terrestrial_centuries(jd_ut);
        let pos = match body {
            codes::SUN => {
                let (lon, dist) = sun::apparent_sun(t);
                (lon, 0.0, dist)
            }
            codes::MOON => {
                let m = moon::moon_position(t);
                (m.lon_deg, m.lat_deg, m.dist_km / KM_PER_AU)
            }
            codes::MERCURY => geocentric_planet(Planet::Mercury, t),
            codes::VENUS => geocentric_planet(Planet::Venus, t),
            codes::MARS => geocentric_planet(Planet::Mars, t),
            codes::JUPITER => geocentric_planet(Planet::Jupiter, t),
            codes::SATURN => geocentric_planet(Planet::Saturn, t),
            codes::TRUE_NODE => {
                // The node is a geometric point on the lunar orbit; it is
                // reported at the mean lunar distance.
                (moon::true_node_deg(t), 0.0, 384_400.0 / KM_PER_AU)
            }
            other => return Err(KernelError::UnknownBody(other)),
        };

        self.cache.borrow_mut().insert(key, pos);
        Ok(pos)
    }
}

fn centuries(jd: f64) -> f64 {
    (jd - 2_451_545.0) / 36_525.0
}

/// Julian centuries of terrestrial time for a UT Julian Date.
fn terrestrial_centuries(jd_ut: f64) -> f64 {
    let year = 2000.0 + (jd_ut - 2_451_544.5) / 365.242_5;
    centuries(jd_ut + delta_t_seconds(year) / 86_400.0)
}

/// Validate an epoch against the kernel's windows without evaluating
/// anything: `Ok(None)` inside the nominal window, `Ok(Some(msg))` with
/// the accuracy warning outside it, `Err` outside the hard window.
pub fn validate_epoch(jd: f64) -> Result<Option<&'static str>, KernelError> {
    check_epoch(jd)
}

fn check_epoch(jd: f64) -> Result<Option<&'static str>, KernelError> {
    if !jd.is_finite() || !(JD_HARD_MIN..=JD_HARD_MAX).contains(&jd) {
        return Err(KernelError::EpochOutOfRange { jd });
    }
    if !(JD_NOMINAL_MIN..=JD_NOMINAL_MAX).contains(&jd) {
        return Ok(Some("epoch outside the nominal accuracy window (1800-2050)"));
    }
    Ok(None)
}

/// Reduce a geocentric position to a topocentric observer (Meeus Ch. 11
/// observer geometry, subtraction in the equatorial frame of date).
fn topocentric(geo: (f64, f64, f64), jd_ut: f64, site: &GeoPoint) -> (f64, f64, f64) {
    let (lon, lat, dist_au) = geo;
    let t = centuries(jd_ut);
    let eps = true_obliquity_deg(t);

    // Geocentric observer coordinates on the flattened Earth.
    let phi = site.latitude_deg.to_radians();
    let u = (EARTH_FLATTENING_RATIO * phi.tan()).atan();
    let alt_ratio = site.altitude_m / (EARTH_RADIUS_KM * 1_000.0);
    let rho_sin = EARTH_FLATTENING_RATIO * u.sin() + alt_ratio * phi.sin();
    let rho_cos = u.cos() + alt_ratio * phi.cos();

    let theta = (gast_deg(jd_ut) + site.longitude_deg).to_radians();
    let radius_au = EARTH_RADIUS_KM / KM_PER_AU;
    let observer_eq = [
        radius_au * rho_cos * theta.cos(),
        radius_au * rho_cos * theta.sin(),
        radius_au * rho_sin,
    ];

    let body_eq = ecliptic_to_equatorial(&spherical_to_cartesian(lon, lat, dist_au), eps);
    let topo_eq = [
        body_eq[0] - observer_eq[0],
        body_eq[1] - observer_eq[1],
        body_eq[2] - observer_eq[2],
    ];
    cartesian_to_spherical(&equatorial_to_ecliptic(&topo_eq, eps))
}
