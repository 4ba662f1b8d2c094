//! Error types for input parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from birth-input parsing or validation.
///
/// Invalid input always fails fast, before any ephemeris work starts;
/// out-of-range coordinates are never silently clamped.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Timestamp was not valid ISO-8601 with an explicit UTC offset.
    Timestamp(String),
    /// Latitude outside [-90, +90] degrees (or not finite).
    LatitudeRange(f64),
    /// Longitude outside [-180, +180] degrees (or not finite).
    LongitudeRange(f64),
    /// Julian Date argument was not finite.
    NonFiniteEpoch,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timestamp(msg) => write!(f, "invalid timestamp: {msg}"),
            Self::LatitudeRange(v) => write!(f, "latitude {v} outside [-90, 90] degrees"),
            Self::LongitudeRange(v) => write!(f, "longitude {v} outside [-180, 180] degrees"),
            Self::NonFiniteEpoch => write!(f, "epoch must be finite"),
        }
    }
}

impl Error for TimeError {}
