//! Apparent solar position from the mean-element series of Meeus Ch. 25.
//!
//! Accuracy ≈ 0.01° in longitude, which also bounds the Earth-position
//! error folded into every geocentric planet reduction.

use crate::frames::normalize_360;

/// Apparent geocentric solar position at `t` Julian centuries from
/// J2000.0: `(lon_deg, dist_au)`. Latitude is below 1.2″ and treated as
/// zero. The longitude includes aberration and the principal nutation
/// term (Meeus 25.10–25.11).
pub fn apparent_sun(t: f64) -> (f64, f64) {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let dist = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    let omega = (125.04 - 1_934.136 * t).to_radians();
    let apparent = true_lon - 0.005_69 - 0.004_78 * omega.sin();

    (normalize_360(apparent), dist)
}

/// Geometric (no aberration/nutation) solar longitude and distance,
/// used where the Earth's heliocentric position is being reconstructed.
pub fn geometric_sun(t: f64) -> (f64, f64) {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let dist = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());
    (normalize_360(true_lon), dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Meeus example 25.a: 1992-10-13.0 TD → apparent λ☉ ≈ 199.9060°,
    /// R ≈ 0.99766 AU.
    #[test]
    fn meeus_example_25a() {
        let t = (2_448_908.5 - 2_451_545.0) / 36_525.0;
        let (lon, dist) = apparent_sun(t);
        assert!((lon - 199.906).abs() < 0.01, "lon = {lon}");
        assert!((dist - 0.997_66).abs() < 1e-4, "dist = {dist}");
    }

    /// Around the (northward) equinox the apparent longitude crosses 0°.
    #[test]
    fn march_equinox_2020() {
        // 2020-03-20T03:50 UTC, JD 2458928.6597.
        let t = (2_458_928.659_7 - 2_451_545.0) / 36_525.0;
        let (lon, _) = apparent_sun(t);
        let dist_from_zero = lon.min(360.0 - lon);
        assert!(dist_from_zero < 0.05, "lon = {lon}");
    }

    /// Distance stays within the orbital limits.
    #[test]
    fn distance_bounds_over_a_year() {
        for day in 0..366 {
            let t = day as f64 / 36_525.0;
            let (_, dist) = apparent_sun(t);
            assert!((0.983..1.017).contains(&dist), "day {day}: {dist}");
        }
    }
}
