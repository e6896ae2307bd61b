//! Reference-frame quantities: obliquity, nutation, precession, sidereal
//! time, and ecliptic↔equatorial rotations.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 12, 13,
//! 21 and 22. All are standard published polynomials.

/// Arcseconds per degree.
const ARCSEC: f64 = 3_600.0;

/// Normalize an angle in degrees to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle in degrees to (-180, 180].
pub fn normalize_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Mean obliquity of the ecliptic in degrees (Meeus 22.2).
///
/// `t` is Julian centuries since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.439_291_111
        - (46.815_0 * t + 0.000_59 * t * t - 0.001_813 * t * t * t) / ARCSEC
}

/// Nutation in longitude and obliquity, arcseconds (principal terms of
/// the IAU 1980 series, Meeus Ch. 22 truncation).
///
/// Returns `(delta_psi_arcsec, delta_eps_arcsec)`.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    let l_sun = (280.466_5 + 36_000.769_8 * t).to_radians();
    let l_moon = (218.316_5 + 481_267.881_3 * t).to_radians();

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();
    (dpsi, deps)
}

/// True obliquity in degrees (mean obliquity plus nutation in obliquity).
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation_arcsec(t).1 / ARCSEC
}

/// Accumulated general precession in ecliptic longitude since J2000.0,
/// in degrees (IAU 2006, P03 polynomial).
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    (5_029.096_6 * t + 1.111_13 * t * t - 0.000_006 * t * t * t) / ARCSEC
}

/// Delta-T (TT − UT) in seconds at a decimal year.
///
/// Espenak-Meeus polynomial segments over 1860–2050, with the
/// Stephenson-Morrison long-term parabola outside that span. Adjacent
/// segments agree to well under a second at the seams.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1860.0 || year >= 2050.0 {
        let u = (year - 1820.0) / 100.0;
        return -20.0 + 32.0 * u * u;
    }
    if year < 1900.0 {
        let t = year - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t * t + 0.01680668 * t * t * t
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t * t + 0.0061966 * t * t * t
            - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t * t * t
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2_547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t * t + 0.0017275 * t * t * t
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    }
}

/// Greenwich Mean Sidereal Time in degrees at a UT Julian Date
/// (Meeus 12.4).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - 2_451_545.0;
    let t = d / 36_525.0;
    normalize_360(
        280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Greenwich Apparent Sidereal Time in degrees (GMST corrected by the
/// equation of the equinoxes).
pub fn gast_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - 2_451_545.0) / 36_525.0;
    let (dpsi, _) = nutation_arcsec(t);
    let eps = true_obliquity_deg(t).to_radians();
    normalize_360(gmst_deg(jd_ut) + dpsi / ARCSEC * eps.cos())
}

/// Ecliptic spherical (deg, deg, any radial unit) → Cartesian.
pub fn spherical_to_cartesian(lon_deg: f64, lat_deg: f64, r: f64) -> [f64; 3] {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    [
        r * lat.cos() * lon.cos(),
        r * lat.cos() * lon.sin(),
        r * lat.sin(),
    ]
}

/// Cartesian → spherical `(lon_deg in [0, 360), lat_deg, r)`.
pub fn cartesian_to_spherical(v: &[f64; 3]) -> (f64, f64, f64) {
    let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    let lon = normalize_360(v[1].atan2(v[0]).to_degrees());
    let lat = (v[2] / r).asin().to_degrees();
    (lon, lat, r)
}

/// Rotate an ecliptic-frame vector into the equatorial frame.
pub fn ecliptic_to_equatorial(v: &[f64; 3], eps_deg: f64) -> [f64; 3] {
    let e = eps_deg.to_radians();
    [
        v[0],
        v[1] * e.cos() - v[2] * e.sin(),
        v[1] * e.sin() + v[2] * e.cos(),
    ]
}

/// Rotate an equatorial-frame vector into the ecliptic frame.
pub fn equatorial_to_ecliptic(v: &[f64; 3], eps_deg: f64) -> [f64; 3] {
    let e = eps_deg.to_radians();
    [
        v[0],
        v[1] * e.cos() + v[2] * e.sin(),
        -v[1] * e.sin() + v[2] * e.cos(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_at_j2000() {
        // 23°26'21.448"
        let eps = mean_obliquity_deg(0.0);
        assert!((eps - 23.439_291).abs() < 1e-5, "eps = {eps}");
    }

    #[test]
    fn nutation_magnitudes() {
        // Nutation in longitude stays within ±20", obliquity within ±10".
        for i in -10..=10 {
            let t = i as f64 / 10.0;
            let (dpsi, deps) = nutation_arcsec(t);
            assert!(dpsi.abs() < 20.0, "dpsi({t}) = {dpsi}");
            assert!(deps.abs() < 10.0, "deps({t}) = {deps}");
        }
    }

    #[test]
    fn precession_rate_per_century() {
        let p = general_precession_longitude_deg(1.0);
        assert!((p - 1.397).abs() < 0.002, "p_A(1) = {p}");
    }

    #[test]
    fn delta_t_reference_values() {
        assert!((delta_t_seconds(2000.0) - 63.86).abs() < 0.5);
        assert!((delta_t_seconds(1977.44) - 48.0).abs() < 1.0);
        assert!((delta_t_seconds(2020.0) - 71.6).abs() < 1.5);
        assert!((delta_t_seconds(1900.0) + 2.7).abs() < 1.0);
    }

    #[test]
    fn delta_t_segments_are_continuous() {
        for &seam in &[1900.0_f64, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0] {
            let before = delta_t_seconds(seam - 1e-6);
            let after = delta_t_seconds(seam + 1e-6);
            assert!(
                (before - after).abs() < 1.0,
                "seam {seam}: {before} vs {after}"
            );
        }
    }

    #[test]
    fn delta_t_far_past_is_large() {
        assert!(delta_t_seconds(-500.0) > 10_000.0);
    }

    #[test]
    fn gmst_meeus_example() {
        // Meeus example 12.b: 1987-04-10T19:21:00 UT → GMST 128.73787°.
        let jd = 2_446_896.306_25;
        let gmst = gmst_deg(jd);
        assert!((gmst - 128.737_87).abs() < 1e-3, "gmst = {gmst}");
    }

    #[test]
    fn spherical_round_trip() {
        let v = spherical_to_cartesian(123.4, -4.5, 2.3);
        let (lon, lat, r) = cartesian_to_spherical(&v);
        assert!((lon - 123.4).abs() < 1e-9);
        assert!((lat + 4.5).abs() < 1e-9);
        assert!((r - 2.3).abs() < 1e-12);
    }

    #[test]
    fn frame_rotations_invert() {
        let v = [0.3, -1.2, 0.7];
        let eps = 23.44;
        let back = equatorial_to_ecliptic(&ecliptic_to_equatorial(&v, eps), eps);
        for i in 0..3 {
            assert!((back[i] - v[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert!((normalize_360(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_360(400.0) - 40.0).abs() < 1e-12);
        assert!((normalize_pm180(350.0) + 10.0).abs() < 1e-12);
        assert!((normalize_pm180(-190.0) - 170.0).abs() < 1e-12);
    }
}
