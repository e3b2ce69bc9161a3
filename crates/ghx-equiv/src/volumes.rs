//! Lumped volume and resistance extraction from source geometries.

use std::f64::consts::PI;

use ghx_bhe::CoaxialBhe;
use ghx_media::Pipe;

/// Lumped quantities the equivalence pipeline conserves.
///
/// Volumes are per meter of borehole (m³/m); resistances are per meter
/// (m·K/W). Recomputed fresh on every equivalence call so they always
/// reflect the source exchanger's current state.
#[derive(Debug, Clone, Copy)]
pub struct EffectiveParams {
    /// Total fluid volume across all flow passages
    pub vol_fluid: f64,
    /// Total pipe-wall material volume
    pub vol_pipe: f64,
    /// Lumped convective resistance
    pub resist_conv: f64,
    /// Lumped pipe-wall conduction resistance
    pub resist_pipe: f64,
}

/// Effective parameters of a parallel U-tube arrangement.
///
/// `h_f` is the per-pipe film coefficient already known to the source model.
pub fn u_tube_effective_params(pipe: &Pipe, h_f: f64) -> EffectiveParams {
    let n = pipe.pos.len() as f64;
    let r_in = pipe.r_in.value;
    let r_out = pipe.r_out.value;

    let area_surf_inner = n * PI * (2.0 * r_in).powi(2);
    let resist_conv = 1.0 / (h_f * area_surf_inner);

    let vol_fluid = n * PI * r_in.powi(2);
    let vol_pipe = n * PI * r_out.powi(2) - vol_fluid;
    let resist_pipe = (r_out / r_in).ln() / (n * 2.0 * PI * pipe.k.value);

    EffectiveParams {
        vol_fluid,
        vol_pipe,
        resist_conv,
        resist_pipe,
    }
}

/// Effective parameters of a coaxial exchanger.
///
/// Fluid fills the central passage and the annulus; the outer pipe wall is
/// the conduction-limiting element, and convection is taken at the outer
/// pipe's inner surface with the annulus film coefficient.
pub fn coaxial_effective_params(bhe: &CoaxialBhe) -> EffectiveParams {
    let r_in_in = bhe.pipe.r_in_in.value;
    let r_in_out = bhe.pipe.r_in_out.value;
    let r_out_in = bhe.pipe.r_out_in.value;
    let r_out_out = bhe.pipe.r_out_out.value;

    let vol_fluid = PI * (r_in_in.powi(2) + r_out_in.powi(2) - r_in_out.powi(2));
    let vol_pipe =
        PI * (r_in_out.powi(2) - r_in_in.powi(2) + r_out_out.powi(2) - r_out_in.powi(2));

    let area_surf_outer = 2.0 * PI * r_out_in;
    let resist_conv = 1.0 / (bhe.annulus_film_coefficient() * area_surf_outer);
    let resist_pipe = (r_out_out / r_out_in).ln() / (2.0 * PI * bhe.pipe.k_outer.value);

    EffectiveParams {
        vol_fluid,
        vol_pipe,
        resist_conv,
        resist_pipe,
    }
}
