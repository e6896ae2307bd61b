//! Lunar position and the true ascending node.
//!
//! Periodic-term evaluation of the abridged ELP-2000/82 theory as
//! tabulated in Meeus Ch. 47. The longitude series is carried in full
//! (60 terms plus the venus/jupiter additives), good to a few
//! thousandths of a degree over several centuries around J2000.

use crate::frames::{normalize_360, nutation_arcsec};

/// Mean lunar distance in km, the constant term of the Σr series.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Geocentric lunar position: apparent longitude (nutation applied),
/// latitude, and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub dist_km: f64,
}

/// Fundamental arguments of the lunar theory in degrees (Meeus 47.1–47.7).
struct Arguments {
    /// Mean longitude.
    lp: f64,
    /// Mean elongation from the Sun.
    d: f64,
    /// Solar mean anomaly.
    m: f64,
    /// Lunar mean anomaly.
    mp: f64,
    /// Argument of latitude.
    f: f64,
    a1: f64,
    a2: f64,
    a3: f64,
    /// Eccentricity damping for terms involving the solar anomaly.
    e: f64,
}

fn arguments(t: f64) -> Arguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    Arguments {
        lp: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
        d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        m: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
        mp: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
        a1: 119.75 + 131.849 * t,
        a2: 53.09 + 479_264.290 * t,
        a3: 313.45 + 481_266.484 * t,
        e: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
    }
}

/// Σl / Σr table (Meeus 47.A): multiples of (D, M, M', F), longitude
/// coefficient in 1e-6 degree, distance coefficient in 1e-3 km.
#[rustfmt::skip]
const LON_DIST_TERMS: [(i8, i8, i8, i8, f64, f64); 60] = [
    (0, 0, 1, 0,  6_288_774.0, -20_905_355.0),
    (2, 0, -1, 0, 1_274_027.0, -3_699_111.0),
    (2, 0, 0, 0,    658_314.0, -2_955_968.0),
    (0, 0, 2, 0,    213_618.0,   -569_925.0),
    (0, 1, 0, 0,   -185_116.0,     48_888.0),
    (0, 0, 0, 2,   -114_332.0,     -3_149.0),
    (2, 0, -2, 0,    58_793.0,    246_158.0),
    (2, -1, -1, 0,   57_066.0,   -152_138.0),
    (2, 0, 1, 0,     53_322.0,   -170_733.0),
    (2, -1, 0, 0,    45_758.0,   -204_586.0),
    (0, 1, -1, 0,   -40_923.0,   -129_620.0),
    (1, 0, 0, 0,    -34_720.0,    108_743.0),
    (0, 1, 1, 0,    -30_383.0,    104_755.0),
    (2, 0, 0, -2,    15_327.0,     10_321.0),
    (0, 0, 1, 2,    -12_528.0,          0.0),
    (0, 0, 1, -2,    10_980.0,     79_661.0),
    (4, 0, -1, 0,    10_675.0,    -34_782.0),
    (0, 0, 3, 0,     10_034.0,    -23_210.0),
    (4, 0, -2, 0,     8_548.0,    -21_636.0),
    (2, 1, -1, 0,    -7_888.0,     24_208.0),
    (2, 1, 0, 0,     -6_766.0,     30_824.0),
    (1, 0, -1, 0,    -5_163.0,     -8_379.0),
    (1, 1, 0, 0,      4_987.0,    -16_675.0),
    (2, -1, 1, 0,     4_036.0,    -12_831.0),
    (2, 0, 2, 0,      3_994.0,    -10_445.0),
    (4, 0, 0, 0,      3_861.0,    -11_650.0),
    (2, 0, -3, 0,     3_665.0,     14_403.0),
    (0, 1, -2, 0,    -2_689.0,     -7_003.0),
    (2, 0, -1, 2,    -2_602.0,          0.0),
    (2, -1, -2, 0,    2_390.0,     10_056.0),
    (1, 0, 1, 0,     -2_348.0,      6_322.0),
    (2, -2, 0, 0,     2_236.0,     -9_884.0),
    (0, 1, 2, 0,     -2_120.0,      5_751.0),
    (0, 2, 0, 0,     -2_069.0,          0.0),
    (2, -2, -1, 0,    2_048.0,     -4_950.0),
    (2, 0, 1, -2,    -1_773.0,      4_130.0),
    (2, 0, 0, 2,     -1_595.0,          0.0),
    (4, -1, -1, 0,    1_215.0,     -3_958.0),
    (0, 0, 2, 2,     -1_110.0,          0.0),
    (3, 0, -1, 0,      -892.0,      3_258.0),
    (2, 1, 1, 0,       -810.0,      2_616.0),
    (4, -1, -2, 0,      759.0,     -1_897.0),
    (0, 2, -1, 0,      -713.0,     -2_117.0),
    (2, 2, -1, 0,      -700.0,      2_354.0),
    (2, 1, -2, 0,       691.0,          0.0),
    (2, -1, 0, -2,      596.0,          0.0),
    (4, 0, 1, 0,        549.0,     -1_423.0),
    (0, 0, 4, 0,        537.0,     -1_117.0),
    (4, -1, 0, 0,       520.0,     -1_571.0),
    (1, 0, -2, 0,      -487.0,     -1_739.0),
    (2, 1, 0, -2,      -399.0,          0.0),
    (0, 0, 2, -2,      -381.0,     -4_421.0),
    (1, 1, 1, 0,        351.0,          0.0),
    (3, 0, -2, 0,      -340.0,          0.0),
    (4, 0, -3, 0,       330.0,          0.0),
    (2, -1, 2, 0,       327.0,          0.0),
    (0, 2, 1, 0,       -323.0,      1_165.0),
    (1, 1, -1, 0,       299.0,          0.0),
    (2, 0, 3, 0,        294.0,          0.0),
    (2, 0, -1, -2,        0.0,      8_752.0),
];

/// Σb table (Meeus 47.B): multiples of (D, M, M', F), latitude
/// coefficient in 1e-6 degree.
#[rustfmt::skip]
const LAT_TERMS: [(i8, i8, i8, i8, f64); 34] = [
    (0, 0, 0, 1,  5_128_122.0),
    (0, 0, 1, 1,    280_602.0),
    (0, 0, 1, -1,   277_693.0),
    (2, 0, 0, -1,   173_237.0),
    (2, 0, -1, 1,    55_413.0),
    (2, 0, -1, -1,   46_271.0),
    (2, 0, 0, 1,     32_573.0),
    (0, 0, 2, 1,     17_198.0),
    (2, 0, 1, -1,     9_266.0),
    (0, 0, 2, -1,     8_822.0),
    (2, -1, 0, -1,    8_216.0),
    (2, 0, -2, -1,    4_324.0),
    (2, 0, 1, 1,      4_200.0),
    (2, 1, 0, -1,    -3_359.0),
    (2, -1, -1, 1,    2_463.0),
    (2, -1, 0, 1,     2_211.0),
    (2, -1, -1, -1,   2_065.0),
    (0, 1, -1, -1,   -1_870.0),
    (4, 0, -1, -1,    1_828.0),
    (0, 1, 0, 1,     -1_794.0),
    (0, 0, 0, 3,     -1_749.0),
    (0, 1, -1, 1,    -1_565.0),
    (1, 0, 0, 1,     -1_491.0),
    (0, 1, 1, 1,     -1_475.0),
    (0, 1, 1, -1,    -1_410.0),
    (0, 1, 0, -1,    -1_344.0),
    (1, 0, 0, -1,    -1_335.0),
    (0, 0, 3, 1,      1_107.0),
    (4, 0, 0, -1,     1_021.0),
    (4, 0, -1, 1,       833.0),
    (0, 0, 1, -3,       777.0),
    (4, 0, -2, 1,       671.0),
    (2, 0, 0, -3,       607.0),
    (2, 0, 2, -1,       596.0),
];

/// Geocentric apparent lunar position at `t` Julian centuries from
/// J2000.0.
pub fn moon_position(t: f64) -> MoonPosition {
    let a = arguments(t);
    let (d, m, mp, f) = (
        a.d.to_radians(),
        a.m.to_radians(),
        a.mp.to_radians(),
        a.f.to_radians(),
    );

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(cd, cm, cmp, cf, l, r) in &LON_DIST_TERMS {
        let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
        let damp = a.e.powi(cm.unsigned_abs() as i32);
        sum_l += l * damp * arg.sin();
        sum_r += r * damp * arg.cos();
    }
    sum_l += 3_958.0 * a.a1.to_radians().sin()
        + 1_962.0 * (a.lp - a.f).to_radians().sin()
        + 318.0 * a.a2.to_radians().sin();

    let mut sum_b = 0.0;
    for &(cd, cm, cmp, cf, b) in &LAT_TERMS {
        let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
        let damp = a.e.powi(cm.unsigned_abs() as i32);
        sum_b += b * damp * arg.sin();
    }
    sum_b += -2_235.0 * a.lp.to_radians().sin()
        + 382.0 * a.a3.to_radians().sin()
        + 175.0 * (a.a1 - a.f).to_radians().sin()
        + 175.0 * (a.a1 + a.f).to_radians().sin()
        + 127.0 * (a.lp - a.mp).to_radians().sin()
        - 115.0 * (a.lp + a.mp).to_radians().sin();

    let (dpsi, _) = nutation_arcsec(t);

    MoonPosition {
        lon_deg: normalize_360(a.lp + sum_l / 1e6 + dpsi / 3_600.0),
        lat_deg: sum_b / 1e6,
        dist_km: MEAN_DISTANCE_KM + sum_r / 1e3,
    }
}

/// Mean longitude of the ascending lunar node in degrees.
pub fn mean_node_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    normalize_360(
        125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0
            - t4 / 60_616_000.0,
    )
}

/// Apparent longitude of the true (osculating) ascending node.
///
/// Mean node plus the principal periodic corrections (Meeus Ch. 47) plus
/// nutation. The corrections make the node's motion non-monotonic: it
/// briefly runs direct around the eclipse seasons, which is exactly the
/// behavior the retrograde machinery keys on for the nodes.
pub fn true_node_deg(t: f64) -> f64 {
    let a = arguments(t);
    let (d, m, mp, f) = (
        a.d.to_radians(),
        a.m.to_radians(),
        a.mp.to_radians(),
        a.f.to_radians(),
    );
    let correction = -1.497_9 * (2.0 * (d - f)).sin() - 0.150_0 * m.sin()
        - 0.122_6 * (2.0 * d).sin()
        + 0.117_6 * (2.0 * f).sin()
        - 0.080_1 * (2.0 * (mp - f)).sin();
    let (dpsi, _) = nutation_arcsec(t);
    normalize_360(mean_node_deg(t) + correction + dpsi / 3_600.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Meeus example 47.a: 1992-04-12.0 TD.
    /// Apparent λ = 133.167265°, β = −3.229126°, Δ = 368409.7 km.
    #[test]
    fn meeus_example_47a() {
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let p = moon_position(t);
        assert!((p.lon_deg - 133.167_265).abs() < 0.01, "lon = {}", p.lon_deg);
        assert!((p.lat_deg + 3.229_126).abs() < 0.01, "lat = {}", p.lat_deg);
        assert!((p.dist_km - 368_409.7).abs() < 200.0, "dist = {}", p.dist_km);
    }

    #[test]
    fn latitude_stays_within_orbit_inclination() {
        for day in 0..60 {
            let t = day as f64 / 36_525.0;
            let p = moon_position(t);
            assert!(p.lat_deg.abs() < 5.4, "day {day}: {}", p.lat_deg);
        }
    }

    #[test]
    fn distance_within_orbital_limits() {
        for day in 0..60 {
            let t = day as f64 / 36_525.0;
            let p = moon_position(t);
            assert!(
                (356_000.0..407_000.0).contains(&p.dist_km),
                "day {day}: {}",
                p.dist_km
            );
        }
    }

    #[test]
    fn mean_node_regresses() {
        let a = mean_node_deg(0.0);
        let b = mean_node_deg(1.0 / 36_525.0); // one day later
        let step = crate::frames::normalize_pm180(b - a);
        assert!((step + 0.052_95).abs() < 1e-3, "step = {step}");
    }

    #[test]
    fn true_node_oscillates_about_mean() {
        for day in 0..200 {
            let t = day as f64 / 36_525.0;
            let diff = crate::frames::normalize_pm180(true_node_deg(t) - mean_node_deg(t));
            assert!(diff.abs() < 2.0, "day {day}: {diff}");
        }
    }
}
