//! Brent's method over a sign-changing bracket.

use crate::error::{SolverError, SolverResult};

/// Root solver configuration.
pub struct RootSolverConfig {
    /// Maximum iterations
    pub max_iter: usize,
    /// Absolute tolerance on the root location
    pub abs_tol: f64,
    /// Relative tolerance on the root location
    pub rel_tol: f64,
}

impl Default for RootSolverConfig {
    fn default() -> Self {
        Self {
            max_iter: 50,
            abs_tol: 1e-6,
            rel_tol: 1e-6,
        }
    }
}

/// Find a root of `f` in `[a, b]` given pre-evaluated `f(a)` and `f(b)` with
/// opposite signs.
///
/// Inverse-quadratic and secant steps with a bisection safeguard; the
/// iterate never leaves the bracket. Errors with `ConvergenceFailed` if the
/// interval has not shrunk below tolerance after `max_iter` iterations.
pub fn brent<F>(
    mut f: F,
    a0: f64,
    b0: f64,
    fa0: f64,
    fb0: f64,
    config: &RootSolverConfig,
) -> SolverResult<f64>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    if !(fa0 * fb0 < 0.0) {
        return Err(SolverError::InvalidBracket {
            lower: a0,
            upper: b0,
        });
    }

    let (mut a, mut b, mut c) = (a0, b0, a0);
    let (mut fa, mut fb, mut fc) = (fa0, fb0, fa0);
    let mut d = b - a;
    let mut e = d;

    for _ in 0..config.max_iter {
        if (fb > 0.0) == (fc > 0.0) {
            // Root is between a and b; reset the contra point
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * config.rel_tol * b.abs() + 0.5 * config.abs_tol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            return Ok(b);
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // Attempt inverse quadratic interpolation (secant if a == c)
            let s = fb / fa;
            let (mut p, mut q);
            if a == c {
                p = 2.0 * xm * s;
                q = 1.0 - s;
            } else {
                let r0 = fa / fc;
                let r1 = fb / fc;
                p = s * (2.0 * xm * r0 * (r0 - r1) - (b - a) * (r1 - 1.0));
                q = (r0 - 1.0) * (r1 - 1.0) * (s - 1.0);
            }
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                // Interpolation acceptable
                e = d;
                d = p / q;
            } else {
                // Fall back to bisection
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol1 { d } else { tol1.copysign(xm) };
        fb = f(b)?;
        if !fb.is_finite() {
            return Err(SolverError::NonFinite { x: b, value: fb });
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "Maximum iterations {} reached, interval = [{}, {}]",
            config.max_iter,
            b.min(c),
            b.max(c)
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadratic_root() {
        // x^2 - 4 = 0 on [0, 5]
        let f = |x: f64| -> SolverResult<f64> { Ok(x * x - 4.0) };
        let config = RootSolverConfig::default();
        let root = brent(f, 0.0, 5.0, -4.0, 21.0, &config).unwrap();
        assert!((root - 2.0).abs() < 1e-6);
    }

    #[test]
    fn logarithmic_root() {
        // ln(x) = 0 at x = 1
        let f = |x: f64| -> SolverResult<f64> { Ok(x.ln()) };
        let config = RootSolverConfig::default();
        let root = brent(f, 0.1, 3.0, 0.1_f64.ln(), 3.0_f64.ln(), &config).unwrap();
        assert!((root - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_unbracketed_input() {
        let f = |x: f64| -> SolverResult<f64> { Ok(x * x + 1.0) };
        let config = RootSolverConfig::default();
        let err = brent(f, 0.0, 1.0, 1.0, 2.0, &config).unwrap_err();
        assert!(matches!(err, SolverError::InvalidBracket { .. }));
    }

    #[test]
    fn iteration_cap_is_enforced() {
        let f = |x: f64| -> SolverResult<f64> { Ok(x.tanh() - 0.5) };
        let config = RootSolverConfig {
            max_iter: 1,
            abs_tol: 1e-14,
            rel_tol: 1e-15,
        };
        let err = brent(f, -5.0, 5.0, (-5.0_f64).tanh() - 0.5, 5.0_f64.tanh() - 0.5, &config)
            .unwrap_err();
        assert!(matches!(err, SolverError::ConvergenceFailed { .. }));
    }
}
