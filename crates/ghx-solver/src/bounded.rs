//! Bounded root solve with deterministic bound fallback.

use crate::brent::{RootSolverConfig, brent};
use crate::error::{SolverError, SolverResult};

/// Solve `objective(x) = 0` for `x` in a bracket around `x0`.
///
/// Missing bounds default to `x0 / 100` and `x0 * 10`, a scale-appropriate
/// bracket for the strictly positive quantities (thermal conductivities)
/// this solver is used on.
///
/// Policy over the bracket endpoints:
/// - an exact zero at either bound is already a root and is returned as-is;
/// - opposite signs: Brent's method confined to the bracket;
/// - both negative: the objective stays below zero, return `lower`;
/// - both positive: return `upper`.
///
/// The objective may mutate captured state (the equivalence pipeline passes
/// closures that update a candidate model in place before returning a
/// residual); it is invoked once per bound plus once per Brent iteration.
pub fn solve_root<F>(
    x0: f64,
    mut objective: F,
    lower: Option<f64>,
    upper: Option<f64>,
    config: &RootSolverConfig,
) -> SolverResult<f64>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    let lower = lower.unwrap_or(x0 / 100.0);
    let upper = upper.unwrap_or(x0 * 10.0);
    if !(lower < upper) {
        return Err(SolverError::InvalidBracket { lower, upper });
    }

    let f_lower = eval(&mut objective, lower)?;
    let f_upper = eval(&mut objective, upper)?;

    if f_lower == 0.0 {
        return Ok(lower);
    }
    if f_upper == 0.0 {
        return Ok(upper);
    }

    if (f_lower > 0.0) != (f_upper > 0.0) {
        brent(objective, lower, upper, f_lower, f_upper, config)
    } else if f_lower < 0.0 {
        Ok(lower)
    } else {
        Ok(upper)
    }
}

fn eval<F>(objective: &mut F, x: f64) -> SolverResult<f64>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    let value = objective(x)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolverError::NonFinite { x, value })
    }
}
