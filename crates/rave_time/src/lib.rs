//! Birth-moment handling: ISO-8601 parsing, coordinate validation, and
//! Julian Date conversions.
//!
//! This crate provides:
//! - [`Moment`], the canonical (instant, observer location) value used
//!   throughout the engine
//! - Julian Date ↔ Unix time conversions
//! - Fail-fast validation of timestamps and geographic coordinates

pub mod error;
pub mod julian;

use chrono::{DateTime, Utc};

pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, jd_to_centuries, jd_to_unix_millis, unix_millis_to_jd};

/// An absolute instant in UT paired with the observer's location.
///
/// Immutable; constructed once per chart request. The location is carried
/// through unchanged when the design instant is solved from a birth moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    jd_ut: f64,
    latitude_deg: f64,
    longitude_deg: f64,
}

impl Moment {
    /// Create a moment from a Julian Date in UT and observer coordinates.
    pub fn new(jd_ut: f64, latitude_deg: f64, longitude_deg: f64) -> Result<Self, TimeError> {
        if !jd_ut.is_finite() {
            return Err(TimeError::NonFiniteEpoch);
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(TimeError::LatitudeRange(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(TimeError::LongitudeRange(longitude_deg));
        }
        Ok(Self {
            jd_ut,
            latitude_deg,
            longitude_deg,
        })
    }

    /// Parse an ISO-8601 timestamp with an explicit UTC offset.
    ///
    /// Offset-less timestamps are rejected: the caller must state the zone,
    /// never assume one.
    pub fn parse(
        timestamp: &str,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, TimeError> {
        let parsed = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|e| TimeError::Timestamp(format!("{timestamp:?}: {e}")))?;
        let jd_ut = unix_millis_to_jd(parsed.with_timezone(&Utc).timestamp_millis());
        Self::new(jd_ut, latitude_deg, longitude_deg)
    }

    /// Julian Date in UT.
    pub fn jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// Observer latitude in degrees, [-90, 90].
    pub fn latitude_deg(self) -> f64 {
        self.latitude_deg
    }

    /// Observer longitude in degrees, [-180, 180].
    pub fn longitude_deg(self) -> f64 {
        self.longitude_deg
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_j2000(self) -> f64 {
        jd_to_centuries(self.jd_ut)
    }

    /// A new moment shifted by `days` (negative = earlier), same location.
    pub fn offset_days(self, days: f64) -> Self {
        Self {
            jd_ut: self.jd_ut + days,
            ..self
        }
    }

    /// A new moment at an explicit Julian Date, same location.
    pub fn at_jd(self, jd_ut: f64) -> Self {
        Self { jd_ut, ..self }
    }

    /// The instant as a UTC calendar time.
    pub fn to_utc(self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(jd_to_unix_millis(self.jd_ut))
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

impl std::fmt::Display for Moment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ ({:+.4}, {:+.4})",
            self.to_utc().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
            self.latitude_deg,
            self.longitude_deg
        )
    }
}
