//! Error type for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use rave_time::TimeError;

/// Errors from a chart request.
///
/// The classifier itself never fails; the only failure modes are bad
/// input (rejected before any computation) and solver non-convergence.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed timestamp or out-of-range coordinates.
    InvalidInput(TimeError),
    /// The design-instant solver did not converge. Carries the last
    /// longitude residual and the iteration count; the unrefined seed is
    /// never returned in its place.
    Convergence { residual_deg: f64, iterations: u32 },
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::Convergence {
                residual_deg,
                iterations,
            } => write!(
                f,
                "design solver did not converge after {iterations} iterations \
                 (residual {residual_deg:.6} deg)"
            ),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::Convergence { .. } => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e)
    }
}
