//! Line-source resistance network for grouted pipes inside a borehole.
//!
//! Zeroth-order multipole: each pipe is a line source, the borehole wall is
//! handled with mirror images scaled by the grout/soil conductivity contrast
//! `sigma = (k_g - k_s) / (k_g + k_s)`. The borehole resistance follows from
//! the uniform-fluid-temperature solution of the pipe-to-pipe resistance
//! matrix; the internal (short-circuit) resistance from the antisymmetric
//! supply/return loading of the same matrix.

use std::f64::consts::PI;

use nalgebra::{DMatrix, DVector};

use crate::error::{BheError, BheResult};

/// Pairwise line-source resistance matrix, including the per-pipe
/// fluid-to-pipe resistance `r_fp` on the diagonal.
fn resistance_matrix(
    pos: &[(f64, f64)],
    r_p_out: f64,
    r_b: f64,
    k_g: f64,
    k_s: f64,
    r_fp: f64,
) -> DMatrix<f64> {
    let n = pos.len();
    let sigma = (k_g - k_s) / (k_g + k_s);
    let rb2 = r_b * r_b;
    let scale = 1.0 / (2.0 * PI * k_g);

    DMatrix::from_fn(n, n, |i, j| {
        let (xi, yi) = pos[i];
        let (xj, yj) = pos[j];
        if i == j {
            let b2 = (xi * xi + yi * yi) / rb2;
            scale * ((r_b / r_p_out).ln() - sigma * (1.0 - b2).ln()) + r_fp
        } else {
            let d_ij = ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt();
            // |1 - z_i * conj(z_j) / r_b^2| for the image term
            let dot = (xi * xj + yi * yj) / rb2;
            let cross = (xi * yj - yi * xj) / rb2;
            let image = ((1.0 - dot).powi(2) + cross * cross).sqrt();
            scale * ((r_b / d_ij).ln() - sigma * image.ln())
        }
    })
}

/// Verify every pipe sits strictly inside the borehole wall.
pub fn check_pipes_fit(pos: &[(f64, f64)], r_p_out: f64, r_b: f64) -> BheResult<()> {
    for (x, y) in pos {
        if (x * x + y * y).sqrt() + r_p_out >= r_b {
            return Err(BheError::NonPhysical {
                what: "pipe extends beyond borehole wall",
            });
        }
    }
    Ok(())
}

/// Local borehole resistance (m·K/W) under uniform fluid temperature.
///
/// Solves `R q = 1` for the per-pipe heat rates at unit fluid-to-wall
/// temperature difference; the lumped resistance is the reciprocal of the
/// total heat rate.
pub fn borehole_resistance(
    pos: &[(f64, f64)],
    r_p_out: f64,
    r_b: f64,
    k_g: f64,
    k_s: f64,
    r_fp: f64,
) -> BheResult<f64> {
    let r = resistance_matrix(pos, r_p_out, r_b, k_g, k_s, r_fp);
    let ones = DVector::from_element(pos.len(), 1.0);
    let q = r.lu().solve(&ones).ok_or(BheError::Singular {
        what: "pipe network resistance matrix",
    })?;
    let total: f64 = q.sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(BheError::NonPhysical {
            what: "non-positive total pipe heat rate",
        });
    }
    Ok(1.0 / total)
}

/// Internal (short-circuit) resistance (m·K/W) between the supply legs
/// (even indices) and the return legs (odd indices).
///
/// Loads the network antisymmetrically (+1 on supply, -1 on return; the wall
/// image contribution cancels because the loads sum to zero) and reads off
/// the mean temperature split between the groups.
pub fn internal_resistance(
    pos: &[(f64, f64)],
    r_p_out: f64,
    r_b: f64,
    k_g: f64,
    k_s: f64,
    r_fp: f64,
) -> BheResult<f64> {
    let n = pos.len();
    if n < 2 || n % 2 != 0 {
        return Err(BheError::InvalidArg {
            what: "internal resistance needs paired pipe legs",
        });
    }
    let r = resistance_matrix(pos, r_p_out, r_b, k_g, k_s, r_fp);
    let q = DVector::from_fn(n, |i, _| if i % 2 == 0 { 1.0 } else { -1.0 });
    let t = r * q;
    let pairs = n as f64 / 2.0;
    let supply: f64 = t.iter().step_by(2).sum::<f64>() / pairs;
    let ret: f64 = t.iter().skip(1).step_by(2).sum::<f64>() / pairs;
    let r_a = 2.0 * (supply - ret) / n as f64;
    if r_a <= 0.0 || !r_a.is_finite() {
        return Err(BheError::NonPhysical {
            what: "non-positive internal resistance",
        });
    }
    Ok(r_a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symmetric_pair(ring: f64) -> Vec<(f64, f64)> {
        vec![(ring, 0.0), (-ring, 0.0)]
    }

    #[test]
    fn matrix_is_symmetric() {
        let pos = vec![(0.03, 0.0), (0.0, 0.03), (-0.03, 0.0), (0.0, -0.03)];
        let r = resistance_matrix(&pos, 0.013, 0.075, 1.0, 2.0, 0.05);
        for i in 0..4 {
            for j in 0..4 {
                assert!((r[(i, j)] - r[(j, i)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn borehole_resistance_decreases_with_grout_conductivity() {
        let pos = symmetric_pair(0.03);
        let lo = borehole_resistance(&pos, 0.013, 0.075, 0.5, 2.0, 0.05).unwrap();
        let mid = borehole_resistance(&pos, 0.013, 0.075, 1.0, 2.0, 0.05).unwrap();
        let hi = borehole_resistance(&pos, 0.013, 0.075, 3.0, 2.0, 0.05).unwrap();
        assert!(lo > mid && mid > hi, "lo = {lo}, mid = {mid}, hi = {hi}");
    }

    #[test]
    fn more_pipes_lower_resistance() {
        let two = symmetric_pair(0.03);
        let four = vec![(0.03, 0.0), (0.0, 0.03), (-0.03, 0.0), (0.0, -0.03)];
        let r2 = borehole_resistance(&two, 0.013, 0.075, 1.0, 2.0, 0.05).unwrap();
        let r4 = borehole_resistance(&four, 0.013, 0.075, 1.0, 2.0, 0.05).unwrap();
        assert!(r4 < r2);
    }

    #[test]
    fn internal_resistance_pair_matches_closed_form() {
        // For two opposed legs the matrix reduces to 2x2 and
        // R_a = 2 * (R11 - R12)
        let pos = symmetric_pair(0.03);
        let r = resistance_matrix(&pos, 0.013, 0.075, 1.0, 2.0, 0.05);
        let expected = 2.0 * (r[(0, 0)] - r[(0, 1)]);
        let r_a = internal_resistance(&pos, 0.013, 0.075, 1.0, 2.0, 0.05).unwrap();
        assert!((r_a - expected).abs() < 1e-12);
    }

    #[test]
    fn pipes_outside_wall_rejected() {
        let pos = symmetric_pair(0.07);
        assert!(check_pipes_fit(&pos, 0.013, 0.075).is_err());
        assert!(check_pipes_fit(&symmetric_pair(0.03), 0.013, 0.075).is_ok());
    }

    #[test]
    fn odd_leg_count_rejected_for_internal_resistance() {
        let pos = vec![(0.03, 0.0)];
        assert!(internal_resistance(&pos, 0.013, 0.075, 1.0, 2.0, 0.05).is_err());
    }
}
