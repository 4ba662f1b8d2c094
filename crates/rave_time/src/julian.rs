//! Julian Date helpers.
//!
//! The engine represents every instant as a Julian Date in UT. ΔT between
//! UT and the dynamical time scales is ~70 s in the modern era, which moves
//! the Sun by less than 0.003 deg; that is well inside the 0.01 deg
//! precision floor of the longitude pipeline, so no leap-second table is
//! carried.

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00 UT).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert Unix milliseconds to a Julian Date in UT.
pub fn unix_millis_to_jd(millis: i64) -> f64 {
    UNIX_EPOCH_JD + millis as f64 / (SECONDS_PER_DAY * 1000.0)
}

/// Convert a Julian Date in UT back to Unix milliseconds (rounded).
pub fn jd_to_unix_millis(jd: f64) -> i64 {
    ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round() as i64
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}
