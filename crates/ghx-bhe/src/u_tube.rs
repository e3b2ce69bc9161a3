//! Shared resistance computation for parallel U-tube arrangements.

use std::f64::consts::PI;

use ghx_core::units::MassRate;
use ghx_media::{Borehole, Fluid, Grout, Pipe, Soil};

use crate::convection::film_coefficient_circular_pipe;
use crate::error::{BheError, BheResult, check_finite};
use crate::network;

/// Derived thermal state of a U-tube heat exchanger.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct UTubeState {
    /// Fluid film coefficient, W/m²·K
    pub h_f: f64,
    /// Per-pipe convective resistance, m·K/W
    pub r_f: f64,
    /// Per-pipe wall conduction resistance, m·K/W
    pub r_p: f64,
    /// Per-pipe fluid-to-pipe resistance, m·K/W
    pub r_fp: f64,
    /// Local borehole resistance, m·K/W
    pub resist_bh: f64,
    /// Effective borehole resistance incl. short-circuiting, m·K/W
    pub resist_bh_effective: f64,
}

pub(crate) fn validate_u_tube(pipe: &Pipe, borehole: &Borehole) -> BheResult<()> {
    if pipe.pos.is_empty() || pipe.pos.len() % 2 != 0 {
        return Err(BheError::InvalidArg {
            what: "U-tube needs an even, non-zero pipe-leg count",
        });
    }
    if !(pipe.r_in.value > 0.0 && pipe.r_out.value > pipe.r_in.value) {
        return Err(BheError::NonPhysical {
            what: "pipe radii must satisfy 0 < r_in < r_out",
        });
    }
    if borehole.radius.value <= 0.0 || borehole.height.value <= 0.0 {
        return Err(BheError::NonPhysical {
            what: "borehole radius and height must be positive",
        });
    }
    network::check_pipes_fit(&pipe.pos, pipe.r_out.value, borehole.radius.value)
}

/// Recompute film coefficient, delta-circuit resistances, and the effective
/// borehole resistance for a parallel U-tube arrangement.
///
/// The borehole flow splits evenly across the U-tube circuits, so each pipe
/// leg carries `m_flow_borehole / n_pairs`.
pub(crate) fn compute_state(
    m_flow_borehole: MassRate,
    fluid: &Fluid,
    borehole: &Borehole,
    pipe: &Pipe,
    grout: &Grout,
    soil: &Soil,
) -> BheResult<UTubeState> {
    if m_flow_borehole.value <= 0.0 {
        return Err(BheError::NonPhysical {
            what: "borehole mass flow rate must be positive",
        });
    }
    let n_pairs = pipe.n_pairs();
    let m_flow_pipe = m_flow_borehole.value / n_pairs as f64;

    let h_f = film_coefficient_circular_pipe(
        m_flow_pipe,
        pipe.r_in.value,
        pipe.roughness.value,
        fluid,
    );
    let r_f = 1.0 / (h_f * 2.0 * PI * pipe.r_in.value);
    let r_p = (pipe.r_out.value / pipe.r_in.value).ln() / (2.0 * PI * pipe.k.value);
    let r_fp = r_f + r_p;

    let resist_bh = network::borehole_resistance(
        &pipe.pos,
        pipe.r_out.value,
        borehole.radius.value,
        grout.k.value,
        soil.k.value,
        r_fp,
    )?;
    let r_a = network::internal_resistance(
        &pipe.pos,
        pipe.r_out.value,
        borehole.radius.value,
        grout.k.value,
        soil.k.value,
        r_fp,
    )?;

    // Hellström short-circuit correction under uniform wall temperature
    let h_over_mcp = borehole.height.value / (m_flow_borehole.value * fluid.cp.value);
    let resist_bh_effective = resist_bh + h_over_mcp * h_over_mcp / (3.0 * r_a);
    check_finite(resist_bh_effective, "effective borehole resistance")?;

    Ok(UTubeState {
        h_f,
        r_f,
        r_p,
        r_fp,
        resist_bh,
        resist_bh_effective,
    })
}
