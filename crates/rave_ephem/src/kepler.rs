//! Geocentric planetary longitudes from osculating Keplerian elements.
//!
//! Elements and secular rates are the Standish approximation for
//! 1800 AD to 2050 AD (JPL, *Keplerian Elements for Approximate Positions
//! of the Major Planets*). Heliocentric positions come from solving
//! Kepler's equation by Newton iteration; geocentric longitude is the
//! vector difference against the Earth-Moon barycenter orbit.
//!
//! This is the documented lower-precision tier of the position provider:
//! good to a few hundredths of a degree for the inner planets and better
//! for the outer ones, which is ample for 5.625 deg gate sectors.

use tracing::warn;

/// Iteration cap for the Newton solver on Kepler's equation.
const KEPLER_MAX_ITERATIONS: usize = 30;

/// Convergence threshold for the eccentric anomaly, in radians (~2e-6 deg).
const KEPLER_TOLERANCE_RAD: f64 = 1e-8;

/// A planet with Standish orbital elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitTarget {
    Mercury,
    Venus,
    /// Earth-Moon barycenter; internal origin for geocentric conversion.
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Keplerian elements at J2000 plus per-century rates.
///
/// Order: semi-major axis (AU), eccentricity, inclination (deg), mean
/// longitude (deg), longitude of perihelion (deg), longitude of the
/// ascending node (deg).
#[derive(Debug, Clone, Copy)]
struct Elements {
    base: [f64; 6],
    rate: [f64; 6],
}

#[rustfmt::skip]
const fn elements_for(target: OrbitTarget) -> Elements {
    // Standish 1800 AD - 2050 AD table.
    match target {
        OrbitTarget::Mercury => Elements {
            base: [0.387_099_27, 0.205_635_93, 7.004_979_02, 252.250_323_50, 77.457_796_28, 48.330_765_93],
            rate: [0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81],
        },
        OrbitTarget::Venus => Elements {
            base: [0.723_335_66, 0.006_776_72, 3.394_676_05, 181.979_099_50, 131.602_467_18, 76.679_842_55],
            rate: [0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18],
        },
        OrbitTarget::EarthMoonBarycenter => Elements {
            base: [1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0],
            rate: [0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0],
        },
        OrbitTarget::Mars => Elements {
            base: [1.523_710_34, 0.093_394_10, 1.849_691_42, -4.553_432_05, -23.943_629_59, 49.559_538_91],
            rate: [0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43],
        },
        OrbitTarget::Jupiter => Elements {
            base: [5.202_887_00, 0.048_386_24, 1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09],
            rate: [-0.000_116_07, -0.000_132_53, -0.001_837_14, 3_034.746_127_75, 0.212_526_68, 0.204_691_06],
        },
        OrbitTarget::Saturn => Elements {
            base: [9.536_675_94, 0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48],
            rate: [-0.001_250_60, -0.000_509_91, 0.001_936_09, 1_222.493_622_01, -0.418_972_16, -0.288_677_94],
        },
        OrbitTarget::Uranus => Elements {
            base: [19.189_164_64, 0.047_257_44, 0.772_637_83, 313.238_104_51, 170.954_276_30, 74.016_925_03],
            rate: [-0.001_961_76, -0.000_043_97, -0.002_429_39, 428.482_027_85, 0.408_052_81, 0.042_405_89],
        },
        OrbitTarget::Neptune => Elements {
            base: [30.069_922_76, 0.008_590_48, 1.770_043_47, -55.120_029_69, 44.964_762_27, 131.784_225_74],
            rate: [0.000_262_91, 0.000_051_05, 0.000_353_72, 218.459_453_25, -0.322_414_64, -0.005_086_64],
        },
        OrbitTarget::Pluto => Elements {
            base: [39.482_116_75, 0.248_827_30, 17.140_012_06, 238.929_038_33, 224.068_916_29, 110.303_936_84],
            rate: [-0.000_315_96, 0.000_051_70, 0.000_048_18, 145.207_805_15, -0.040_629_42, -0.011_834_82],
        },
    }
}

/// Normalize an angle to (-180, +180] degrees.
fn normalize_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Solve Kepler's equation M = E - e sin E for the eccentric anomaly.
///
/// Newton iteration seeded at E = M + e sin M. Returns the eccentric
/// anomaly in radians, or the iteration count on non-convergence so the
/// caller can fall back to the mean orbit.
pub(crate) fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> Result<f64, usize> {
    let m = mean_anomaly_rad;
    let mut ecc_anomaly = m + e * m.sin();
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (m - (ecc_anomaly - e * ecc_anomaly.sin())) / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly += delta;
        if delta.abs() < KEPLER_TOLERANCE_RAD {
            return Ok(ecc_anomaly);
        }
    }
    Err(KEPLER_MAX_ITERATIONS)
}

/// Heliocentric ecliptic position (J2000 ecliptic plane), in AU.
///
/// On Kepler non-convergence the body degrades to its mean orbit
/// (eccentric anomaly = mean anomaly); the degradation is logged, never
/// surfaced as an error.
pub fn heliocentric_position(target: OrbitTarget, t: f64) -> [f64; 3] {
    let el = elements_for(target);
    let a = el.base[0] + el.rate[0] * t;
    let e = el.base[1] + el.rate[1] * t;
    let incl = (el.base[2] + el.rate[2] * t).to_radians();
    let mean_lon = el.base[3] + el.rate[3] * t;
    let peri_lon = el.base[4] + el.rate[4] * t;
    let node_lon = (el.base[5] + el.rate[5] * t).to_radians();

    let arg_peri = peri_lon.to_radians() - node_lon;
    let mean_anomaly = normalize_pm180(mean_lon - peri_lon).to_radians();

    let ecc_anomaly = match solve_kepler(mean_anomaly, e) {
        Ok(ea) => ea,
        Err(iterations) => {
            warn!(
                ?target,
                iterations, "Kepler solver did not converge; using mean orbit for this body"
            );
            mean_anomaly
        }
    };

    // Position in the orbital plane, perihelion along +x.
    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    // Rotate by argument of perihelion, inclination, ascending node.
    let (sin_w, cos_w) = arg_peri.sin_cos();
    let (sin_o, cos_o) = node_lon.sin_cos();
    let (sin_i, cos_i) = incl.sin_cos();

    [
        (cos_w * cos_o - sin_w * sin_o * cos_i) * xp + (-sin_w * cos_o - cos_w * sin_o * cos_i) * yp,
        (cos_w * sin_o + sin_w * cos_o * cos_i) * xp + (-sin_w * sin_o + cos_w * cos_o * cos_i) * yp,
        (sin_w * sin_i) * xp + (cos_w * sin_i) * yp,
    ]
}

/// Geocentric ecliptic longitude, latitude (deg) and distance (AU).
///
/// The Earth-Moon barycenter stands in for the Earth's own position; the
/// offset is below 5e-5 AU and negligible at gate resolution.
pub fn geocentric_lon_lat_dist(target: OrbitTarget, t: f64) -> (f64, f64, f64) {
    let planet = heliocentric_position(target, t);
    let earth = heliocentric_position(OrbitTarget::EarthMoonBarycenter, t);
    let rel = [
        planet[0] - earth[0],
        planet[1] - earth[1],
        planet[2] - earth[2],
    ];
    let dist = (rel[0] * rel[0] + rel[1] * rel[1] + rel[2] * rel[2]).sqrt();
    let lon = rel[1].atan2(rel[0]).to_degrees();
    let lat = (rel[2] / dist).asin().to_degrees();
    (if lon < 0.0 { lon + 360.0 } else { lon }, lat, dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar::sun_longitude_deg;
    use rave_time::{J2000_JD, jd_to_centuries};

    #[test]
    fn kepler_converges_low_eccentricity() {
        for deg in (0..360).step_by(15) {
            let m = (deg as f64).to_radians();
            let ea = solve_kepler(m, 0.0167).expect("must converge");
            let residual = ea - 0.0167 * ea.sin() - m;
            assert!(residual.abs() < 1e-9, "m={deg}: residual {residual}");
        }
    }

    #[test]
    fn kepler_converges_pluto_eccentricity() {
        for deg in (0..360).step_by(30) {
            let m = (deg as f64).to_radians();
            let ea = solve_kepler(m, 0.2488).expect("must converge");
            let residual = ea - 0.2488 * ea.sin() - m;
            assert!(residual.abs() < 1e-9, "m={deg}: residual {residual}");
        }
    }

    #[test]
    fn earth_orbit_mirrors_solar_series() {
        // Geocentric Sun = anti-Earth: the Keplerian EMB longitude + 180
        // must agree with the Chapter-25 solar series to a few hundredths.
        for day in (0..3660).step_by(111) {
            let t = jd_to_centuries(J2000_JD + day as f64);
            let earth = heliocentric_position(OrbitTarget::EarthMoonBarycenter, t);
            let helio_lon = earth[1].atan2(earth[0]).to_degrees();
            let sun_lon = sun_longitude_deg(t);
            let mut diff = (helio_lon + 180.0 - sun_lon).abs() % 360.0;
            if diff > 180.0 {
                diff = 360.0 - diff;
            }
            assert!(diff < 0.05, "day {day}: diff = {diff}");
        }
    }

    #[test]
    fn mercury_stays_near_sun() {
        // Maximum elongation of Mercury is ~28 deg.
        for day in (0..2000).step_by(13) {
            let t = jd_to_centuries(J2000_JD + day as f64);
            let (lon, _, _) = geocentric_lon_lat_dist(OrbitTarget::Mercury, t);
            let mut diff = (lon - sun_longitude_deg(t)).abs() % 360.0;
            if diff > 180.0 {
                diff = 360.0 - diff;
            }
            assert!(diff < 30.0, "day {day}: Mercury elongation = {diff}");
        }
    }

    #[test]
    fn venus_stays_near_sun() {
        // Maximum elongation of Venus is ~47 deg.
        for day in (0..2000).step_by(17) {
            let t = jd_to_centuries(J2000_JD + day as f64);
            let (lon, _, _) = geocentric_lon_lat_dist(OrbitTarget::Venus, t);
            let mut diff = (lon - sun_longitude_deg(t)).abs() % 360.0;
            if diff > 180.0 {
                diff = 360.0 - diff;
            }
            assert!(diff < 50.0, "day {day}: Venus elongation = {diff}");
        }
    }

    #[test]
    fn jupiter_moves_slowly() {
        let t0 = jd_to_centuries(J2000_JD);
        let t1 = jd_to_centuries(J2000_JD + 30.0);
        let (a, _, _) = geocentric_lon_lat_dist(OrbitTarget::Jupiter, t0);
        let (b, _, _) = geocentric_lon_lat_dist(OrbitTarget::Jupiter, t1);
        let mut diff = (b - a).abs() % 360.0;
        if diff > 180.0 {
            diff = 360.0 - diff;
        }
        // Geocentric Jupiter never exceeds ~0.25 deg/day even with
        // retrograde parallax included.
        assert!(diff < 8.0, "Jupiter moved {diff} deg in 30 days");
    }

    #[test]
    fn distances_plausible() {
        let t = jd_to_centuries(J2000_JD + 500.0);
        let (_, _, mars) = geocentric_lon_lat_dist(OrbitTarget::Mars, t);
        let (_, _, neptune) = geocentric_lon_lat_dist(OrbitTarget::Neptune, t);
        assert!((0.3..2.7).contains(&mars), "Mars at {mars} AU");
        assert!((28.0..32.0).contains(&neptune), "Neptune at {neptune} AU");
    }

    #[test]
    fn latitudes_near_ecliptic() {
        for &target in &[
            OrbitTarget::Mercury,
            OrbitTarget::Venus,
            OrbitTarget::Mars,
            OrbitTarget::Jupiter,
            OrbitTarget::Saturn,
            OrbitTarget::Uranus,
            OrbitTarget::Neptune,
        ] {
            let (_, lat, _) = geocentric_lon_lat_dist(target, 0.1);
            assert!(lat.abs() < 12.0, "{target:?}: lat = {lat}");
        }
    }
}
