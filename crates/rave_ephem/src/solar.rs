//! Solar ecliptic longitude from the low-accuracy series.
//!
//! Mean longitude plus equation-of-center correction with three harmonic
//! terms (Meeus, *Astronomical Algorithms* 2nd ed., Chapter 25). Accuracy
//! is ~0.01 deg over several centuries around J2000, which is the floor
//! the gate pipeline requires: gate sectors are 5.625 deg wide and the
//! design-instant solver converges on this same series.

use rave_time::jd_to_centuries;

/// Normalize an angle to [0, 360) degrees.
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Geometric mean longitude of the Sun in degrees.
///
/// `t` = Julian centuries of UT since J2000.0.
pub fn mean_longitude_deg(t: f64) -> f64 {
    normalize_360(280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t)
}

/// Mean anomaly of the Sun in degrees.
pub fn mean_anomaly_deg(t: f64) -> f64 {
    normalize_360(357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t)
}

/// Eccentricity of Earth's orbit.
pub fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Equation of center in degrees: three harmonic terms in the mean anomaly.
pub fn equation_of_center_deg(t: f64) -> f64 {
    let m = mean_anomaly_deg(t).to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Geometric true ecliptic longitude of the Sun in degrees [0, 360).
pub fn sun_longitude_deg(t: f64) -> f64 {
    normalize_360(mean_longitude_deg(t) + equation_of_center_deg(t))
}

/// Sun-Earth distance in AU.
pub fn sun_distance_au(t: f64) -> f64 {
    let e = eccentricity(t);
    let nu = (mean_anomaly_deg(t) + equation_of_center_deg(t)).to_radians();
    1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos())
}

/// Solar longitude at a Julian Date in UT. Convenience for the solver.
pub fn sun_longitude_at_jd(jd_ut: f64) -> f64 {
    sun_longitude_deg(jd_to_centuries(jd_ut))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rave_time::J2000_JD;

    #[test]
    fn longitude_at_j2000() {
        // Geometric solar longitude at J2000.0 is ~280.38 deg
        let lon = sun_longitude_deg(0.0);
        assert!((lon - 280.38).abs() < 0.05, "lon = {lon}");
    }

    #[test]
    fn march_equinox_2000() {
        // 2000-03-20T07:35Z: solar longitude crosses 0
        let jd = 2_451_623.816;
        let lon = sun_longitude_at_jd(jd);
        let wrapped = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(wrapped.abs() < 0.05, "lon = {lon}");
    }

    #[test]
    fn june_solstice_2000() {
        // 2000-06-21T01:48Z: solar longitude ~90
        let jd = 2_451_716.575;
        let lon = sun_longitude_at_jd(jd);
        assert!((lon - 90.0).abs() < 0.05, "lon = {lon}");
    }

    #[test]
    fn december_solstice_2020() {
        // 2020-12-21T10:02Z: solar longitude ~270
        let jd = 2_459_204.918;
        let lon = sun_longitude_at_jd(jd);
        assert!((lon - 270.0).abs() < 0.05, "lon = {lon}");
    }

    #[test]
    fn tropical_year_periodicity() {
        let lon_a = sun_longitude_at_jd(J2000_JD);
        let lon_b = sun_longitude_at_jd(J2000_JD + 365.2422);
        let mut diff = (lon_b - lon_a).abs();
        if diff > 180.0 {
            diff = 360.0 - diff;
        }
        assert!(diff < 0.05, "diff over one tropical year = {diff}");
    }

    #[test]
    fn angular_speed_varies_seasonally() {
        // Perihelion (early January) is faster than aphelion (early July).
        let jan = sun_longitude_at_jd(J2000_JD + 3.0) - sun_longitude_at_jd(J2000_JD + 2.0);
        let jul_a = sun_longitude_at_jd(J2000_JD + 185.0);
        let jul_b = sun_longitude_at_jd(J2000_JD + 186.0);
        let jul = jul_b - jul_a;
        assert!(jan > 1.01, "January speed = {jan} deg/day");
        assert!(jul < 0.96, "July speed = {jul} deg/day");
    }

    #[test]
    fn distance_bounds() {
        for day in 0..366 {
            let r = sun_distance_au(jd_to_centuries(J2000_JD + day as f64));
            assert!((0.98..1.02).contains(&r), "day {day}: r = {r}");
        }
    }
}
