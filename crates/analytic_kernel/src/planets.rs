//! Geocentric planetary positions from JPL mean orbital elements.
//!
//! Uses the Standish approximate elements (valid 1800–2050) with a
//! Kepler solve and heliocentric→geocentric composition. The Earth's
//! heliocentric position comes from the Earth–Moon barycenter elements
//! corrected by the lunar offset. Longitudes are reduced to the true
//! equinox of date (precession + nutation); planetary aberration is not
//! modelled, which keeps errors within a few hundredths of a degree.

use crate::frames::{
    cartesian_to_spherical, general_precession_longitude_deg, normalize_360, nutation_arcsec,
};
use crate::moon::moon_position;

/// Kilometres per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Moon/(Earth+Moon) mass ratio, for the EMB → Earth correction.
const MOON_MASS_FRACTION: f64 = 1.0 / 82.300_56;

/// Mean orbital elements at J2000 and their per-century rates.
///
/// Fields: semi-major axis (AU), eccentricity, inclination, mean
/// longitude, longitude of perihelion, longitude of ascending node
/// (all angles in degrees).
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: (f64, f64),
    e: (f64, f64),
    i: (f64, f64),
    l: (f64, f64),
    peri: (f64, f64),
    node: (f64, f64),
}

const MERCURY: Elements = Elements {
    a: (0.387_099_27, 0.000_000_37),
    e: (0.205_635_93, 0.000_019_06),
    i: (7.004_979_02, -0.005_947_49),
    l: (252.250_323_50, 149_472.674_111_75),
    peri: (77.457_796_28, 0.160_476_89),
    node: (48.330_765_93, -0.125_340_81),
};

const VENUS: Elements = Elements {
    a: (0.723_335_66, 0.000_003_90),
    e: (0.006_776_72, -0.000_041_07),
    i: (3.394_676_05, -0.000_788_90),
    l: (181.979_099_50, 58_517.815_387_29),
    peri: (131.602_467_18, 0.002_683_29),
    node: (76.679_842_55, -0.277_694_18),
};

const EARTH_MOON_BARY: Elements = Elements {
    a: (1.000_002_61, 0.000_005_62),
    e: (0.016_711_23, -0.000_043_92),
    i: (-0.000_015_31, -0.012_946_68),
    l: (100.464_571_66, 35_999.372_449_81),
    peri: (102.937_681_93, 0.323_273_64),
    node: (0.0, 0.0),
};

const MARS: Elements = Elements {
    a: (1.523_710_34, 0.000_018_47),
    e: (0.093_394_10, 0.000_078_82),
    i: (1.849_691_42, -0.008_131_31),
    l: (-4.553_432_05, 19_140.302_684_99),
    peri: (-23.943_629_59, 0.444_410_88),
    node: (49.559_538_91, -0.292_573_43),
};

const JUPITER: Elements = Elements {
    a: (5.202_887_00, -0.000_116_07),
    e: (0.048_386_24, -0.000_132_53),
    i: (1.304_396_95, -0.001_837_14),
    l: (34.396_440_51, 3_034.746_127_75),
    peri: (14.728_479_83, 0.212_526_68),
    node: (100.473_909_09, 0.204_691_06),
};

const SATURN: Elements = Elements {
    a: (9.536_675_94, -0.001_250_60),
    e: (0.053_861_79, -0.000_509_91),
    i: (2.485_991_87, 0.001_936_09),
    l: (49.954_244_23, 1_222.493_622_01),
    peri: (92.598_878_31, -0.418_972_16),
    node: (113.662_424_48, -0.288_677_94),
};

/// Planets carried by this module, in kernel-code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    fn elements(self) -> Elements {
        match self {
            Self::Mercury => MERCURY,
            Self::Venus => VENUS,
            Self::Mars => MARS,
            Self::Jupiter => JUPITER,
            Self::Saturn => SATURN,
        }
    }
}

fn at(el: (f64, f64), t: f64) -> f64 {
    el.0 + el.1 * t
}

/// Solve Kepler's equation `E − e·sin E = M` by Newton iteration.
fn eccentric_anomaly(mean_anomaly_rad: f64, e: f64) -> f64 {
    let m = mean_anomaly_rad;
    let mut ecc = m + e * m.sin();
    for _ in 0..10 {
        let delta = (ecc - e * ecc.sin() - m) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < 1e-13 {
            break;
        }
    }
    ecc
}

/// Heliocentric J2000-ecliptic position in AU from mean elements.
fn heliocentric(el: Elements, t: f64) -> [f64; 3] {
    let a = at(el.a, t);
    let e = at(el.e, t);
    let i = at(el.i, t).to_radians();
    let l = at(el.l, t);
    let peri = at(el.peri, t);
    let node = at(el.node, t);

    let m = normalize_360(l - peri).to_radians();
    let ecc = eccentric_anomaly(m, e);

    // True anomaly and radius from the eccentric anomaly.
    let nu = 2.0
        * (((1.0 + e) / (1.0 - e)).sqrt() * (ecc / 2.0).tan()).atan();
    let r = a * (1.0 - e * ecc.cos());

    let omega = (peri - node).to_radians();
    let node = node.to_radians();
    let u = omega + nu;

    [
        r * (u.cos() * node.cos() - u.sin() * node.sin() * i.cos()),
        r * (u.cos() * node.sin() + u.sin() * node.cos() * i.cos()),
        r * u.sin() * i.sin(),
    ]
}

/// Earth's heliocentric J2000-ecliptic position in AU.
fn earth_heliocentric(t: f64) -> [f64; 3] {
    let emb = heliocentric(EARTH_MOON_BARY, t);
    // The barycenter leads the Earth by the mass-weighted lunar offset.
    let moon = moon_position(t);
    let geo = crate::frames::spherical_to_cartesian(
        moon.lon_deg,
        moon.lat_deg,
        moon.dist_km / KM_PER_AU,
    );
    [
        emb[0] - geo[0] * MOON_MASS_FRACTION,
        emb[1] - geo[1] * MOON_MASS_FRACTION,
        emb[2] - geo[2] * MOON_MASS_FRACTION,
    ]
}

/// Apparent geocentric ecliptic position of a planet at `t` Julian
/// centuries from J2000.0: `(lon_deg, lat_deg, dist_au)`, true equinox
/// of date.
pub fn geocentric_planet(planet: Planet, t: f64) -> (f64, f64, f64) {
    let p = heliocentric(planet.elements(), t);
    let earth = earth_heliocentric(t);
    let geo = [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]];
    let (lon_j2000, lat, dist) = cartesian_to_spherical(&geo);

    let (dpsi, _) = nutation_arcsec(t);
    let lon = normalize_360(
        lon_j2000 + general_precession_longitude_deg(t) + dpsi / 3_600.0,
    );
    (lon, lat, dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::normalize_pm180;
    use crate::sun::apparent_sun;

    fn centuries(jd: f64) -> f64 {
        (jd - 2_451_545.0) / 36_525.0
    }

    /// At opposition a superior planet sits 180° from the Sun.
    /// Mars opposition: 2020-10-13.
    #[test]
    fn mars_opposition_2020() {
        let t = centuries(2_459_135.5);
        let (mars, _, _) = geocentric_planet(Planet::Mars, t);
        let (sun, _) = apparent_sun(t);
        let sep = normalize_pm180(mars - sun - 180.0);
        assert!(sep.abs() < 1.0, "separation from anti-sun: {sep}");
    }

    /// Venus inferior conjunction: 2020-06-03.
    #[test]
    fn venus_inferior_conjunction_2020() {
        let t = centuries(2_459_003.5);
        let (venus, _, dist) = geocentric_planet(Planet::Venus, t);
        let (sun, _) = apparent_sun(t);
        let sep = normalize_pm180(venus - sun);
        assert!(sep.abs() < 1.5, "separation from sun: {sep}");
        assert!(dist < 0.4, "inferior conjunction distance: {dist}");
    }

    /// The Jupiter–Saturn great conjunction of 2020-12-21 (≈0.1° apart).
    #[test]
    fn great_conjunction_2020() {
        let t = centuries(2_459_204.5);
        let (jup, _, _) = geocentric_planet(Planet::Jupiter, t);
        let (sat, _, _) = geocentric_planet(Planet::Saturn, t);
        let sep = normalize_pm180(jup - sat);
        assert!(sep.abs() < 0.5, "separation: {sep}");
    }

    /// Kepler solver converges for high eccentricity.
    #[test]
    fn kepler_residual_is_small() {
        for i in 0..36 {
            let m = (i as f64 * 10.0).to_radians();
            let e = 0.21;
            let ecc = eccentric_anomaly(m, e);
            let residual = ecc - e * ecc.sin() - m;
            assert!(residual.abs() < 1e-10, "M = {m}: residual {residual}");
        }
    }

    /// Heliocentric distances stay near the semi-major axis.
    #[test]
    fn heliocentric_radius_bounds() {
        for &(planet, a, e) in &[
            (Planet::Mercury, 0.387, 0.206),
            (Planet::Venus, 0.723, 0.007),
            (Planet::Mars, 1.524, 0.094),
            (Planet::Jupiter, 5.203, 0.049),
            (Planet::Saturn, 9.537, 0.054),
        ] {
            for month in 0..24 {
                let t = month as f64 / 1_200.0;
                let p = heliocentric(planet.elements(), t);
                let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
                assert!(
                    r > a * (1.0 - e) * 0.99 && r < a * (1.0 + e) * 1.01,
                    "{planet:?} month {month}: r = {r}"
                );
            }
        }
    }
}
