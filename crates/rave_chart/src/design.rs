//! Design-instant solver.
//!
//! Locates the instant, strictly before birth, at which the Sun's
//! ecliptic longitude is exactly [`DESIGN_ARC_DEG`] behind its
//! birth-instant longitude. A fixed day count is only a seed: solar
//! angular speed varies ~±3% over the year, enough to put a fixed-day
//! estimate on the wrong side of a 5.625 deg gate boundary. The root of
//! f(t) = wrap(sun_lon(t) - target) is bracketed around the seed and
//! refined by bisection with a hard iteration cap.

use tracing::debug;

use rave_ephem::sun_longitude_at_jd;
use rave_time::Moment;

use crate::error::ChartError;

/// Solar arc between the birth and design instants, in degrees.
pub const DESIGN_ARC_DEG: f64 = 88.0;

/// Mean solar motion in degrees per day (360 over the tropical year).
const MEAN_SOLAR_MOTION_DEG_PER_DAY: f64 = 360.0 / 365.2422;

/// Half-width of the bisection bracket around the seed, in days.
const BRACKET_HALF_WIDTH_DAYS: f64 = 5.0;

/// Widened half-width used if the first bracket misses the root.
const WIDE_BRACKET_HALF_WIDTH_DAYS: f64 = 10.0;

/// Hard cap on bisection iterations.
const MAX_ITERATIONS: u32 = 50;

/// Convergence threshold on the longitude residual, in degrees. Well
/// under the ~0.01 deg accuracy floor of the solar series.
const TOLERANCE_DEG: f64 = 1e-4;

/// A solved design instant with solver telemetry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignSolution {
    /// The design instant (same observer location as the birth moment).
    pub moment: Moment,
    /// Solar longitude at the design instant, degrees [0, 360).
    pub sun_longitude_deg: f64,
    /// Final longitude residual against the target, degrees.
    pub residual_deg: f64,
    /// Bisection iterations used.
    pub iterations: u32,
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

/// Normalize an angle to [0, 360) degrees.
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Signed longitude residual at `jd` against the target longitude.
fn residual(target_deg: f64, jd: f64) -> f64 {
    normalize_pm180(sun_longitude_at_jd(jd) - target_deg)
}

/// A sign change that is a genuine zero crossing, not a ±180 wrap.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Bisect f(t) = wrap(sun_lon(t) - target) to below tolerance.
fn refine(
    target_deg: f64,
    mut t_lo: f64,
    mut f_lo: f64,
    mut t_hi: f64,
) -> Result<(f64, f64, u32), ChartError> {
    let mut last_residual = f_lo;
    for iteration in 1..=MAX_ITERATIONS {
        let t_mid = 0.5 * (t_lo + t_hi);
        let f_mid = residual(target_deg, t_mid);
        last_residual = f_mid;

        if f_mid.abs() < TOLERANCE_DEG {
            return Ok((t_mid, f_mid, iteration));
        }

        if f_lo * f_mid <= 0.0 {
            t_hi = t_mid;
        } else {
            t_lo = t_mid;
            f_lo = f_mid;
        }
    }
    Err(ChartError::Convergence {
        residual_deg: last_residual,
        iterations: MAX_ITERATIONS,
    })
}

/// Solve for the design instant of a birth moment.
///
/// Seeds at 88 deg of mean solar motion (~89.3 days) before birth, then
/// brackets and bisects the true-longitude residual. Errors rather than
/// ever falling back to the seed estimate.
pub fn solve_design_moment(birth: &Moment) -> Result<DesignSolution, ChartError> {
    let birth_sun = sun_longitude_at_jd(birth.jd_ut());
    let target = normalize_360(birth_sun - DESIGN_ARC_DEG);
    let seed = birth.jd_ut() - DESIGN_ARC_DEG / MEAN_SOLAR_MOTION_DEG_PER_DAY;

    let bracket = |half_width: f64| -> Option<(f64, f64, f64)> {
        let t_lo = seed - half_width;
        let t_hi = seed + half_width;
        let f_lo = residual(target, t_lo);
        let f_hi = residual(target, t_hi);
        is_genuine_crossing(f_lo, f_hi).then_some((t_lo, f_lo, t_hi))
    };

    let (t_lo, f_lo, t_hi) = bracket(BRACKET_HALF_WIDTH_DAYS)
        .or_else(|| bracket(WIDE_BRACKET_HALF_WIDTH_DAYS))
        .ok_or(ChartError::Convergence {
            residual_deg: residual(target, seed),
            iterations: 0,
        })?;

    let (jd, residual_deg, iterations) = refine(target, t_lo, f_lo, t_hi)?;
    debug!(jd, residual_deg, iterations, "design instant solved");

    Ok(DesignSolution {
        moment: birth.at_jd(jd),
        sun_longitude_deg: sun_longitude_at_jd(jd),
        residual_deg,
        iterations,
    })
}
