//! Equivalent single U-tube construction.

use std::f64::consts::PI;

use ghx_bhe::{AnyBhe, BoreholeHeatExchanger, SingleUTube};
use ghx_core::units::{Length, VolHeatCapacity};
use ghx_core::{m, wpmk};
use ghx_media::{Fluid, Grout, Pipe, Soil};
use ghx_solver::{RootSolverConfig, SolverError, solve_root};
use tracing::warn;

use crate::error::{EquivError, EquivResult};
use crate::volumes::EffectiveParams;

/// Pipe count of the equivalent cross-section (one U-tube)
const N_EQ: f64 = 2.0;

/// Descriptor values the candidate copies from the source exchanger.
///
/// Borrowed here, cloned into the candidate at construction, so the two
/// models share no mutable backing storage.
struct SourceProps<'a> {
    roughness: Length,
    rho_cp: VolHeatCapacity,
    fluid: &'a Fluid,
    grout: &'a Grout,
    soil: &'a Soil,
}

fn source_props(source: &AnyBhe) -> EquivResult<SourceProps<'_>> {
    match source {
        AnyBhe::SingleUTube(bhe) => Ok(SourceProps {
            roughness: bhe.pipe.roughness,
            rho_cp: bhe.pipe.rho_cp,
            fluid: &bhe.fluid,
            grout: &bhe.grout,
            soil: &bhe.soil,
        }),
        AnyBhe::MultipleUTube(bhe) => Ok(SourceProps {
            roughness: bhe.pipe.roughness,
            rho_cp: bhe.pipe.rho_cp,
            fluid: &bhe.fluid,
            grout: &bhe.grout,
            soil: &bhe.soil,
        }),
        AnyBhe::Coaxial(bhe) => Ok(SourceProps {
            roughness: bhe.pipe.roughness,
            rho_cp: bhe.pipe.rho_cp,
            fluid: &bhe.fluid,
            grout: &bhe.grout,
            soil: &bhe.soil,
        }),
        _ => Err(EquivError::UnsupportedVariant {
            kind: source.kind(),
        }),
    }
}

/// Build a single U-tube thermally equivalent to `source`.
///
/// The equivalent pipe radii conserve the extracted fluid and pipe volumes
/// exactly; the pipe conductivity starts at the closed-form
/// conduction-conserving estimate and is then refined by a bounded root
/// solve until the candidate's fluid-to-pipe resistance reproduces the
/// source's combined convective plus conductive resistance.
pub fn equivalent_single_u_tube(
    source: &AnyBhe,
    params: &EffectiveParams,
    config: &RootSolverConfig,
) -> EquivResult<SingleUTube> {
    let props = source_props(source)?;

    // Closed-form two-pipe cross-section conserving both volumes
    let r_in_eq = (params.vol_fluid / (N_EQ * PI)).sqrt();
    let r_out_eq = ((params.vol_fluid + params.vol_pipe) / (N_EQ * PI)).sqrt();
    // Initial estimate only; refined by the root solve below
    let k_p_eq = (r_out_eq / r_in_eq).ln() / (2.0 * PI * N_EQ * params.resist_pipe);

    // Place the pipe pair at a borehole-center spacing
    let mut borehole = source.borehole().clone();
    let mut spacing = borehole.radius.value * 2.0 - N_EQ * r_out_eq * 2.0;
    if spacing <= 0.0 {
        // The derived pipe does not fit: grow the borehole by the shortfall,
        // then reserve a tenth of the new diameter as spacing
        let original_radius = borehole.radius.value;
        let mut radius = original_radius - spacing;
        spacing = radius * 2.0 / 10.0;
        radius += spacing;
        borehole.radius = m(radius);
        warn!(
            original_radius_m = original_radius,
            enlarged_radius_m = radius,
            "equivalent pipe exceeds borehole; enlarging borehole radius"
        );
    }
    let s = spacing / 3.0;
    let pos = Pipe::place_pipes(m(s), m(r_out_eq), 1);

    let pipe = Pipe::new(
        pos,
        m(r_in_eq),
        m(r_out_eq),
        m(s),
        props.roughness,
        wpmk(k_p_eq),
        props.rho_cp,
    );

    // Same flow rate so the short-circuit behavior is comparable
    let mut equivalent = SingleUTube::new(
        source.flow_rate(),
        props.fluid.clone(),
        borehole,
        pipe,
        props.grout.clone(),
        props.soil.clone(),
    )?;

    // Vary the pipe conductivity until the candidate's fluid-to-pipe
    // resistance reproduces the source's convective + conductive lump
    let target = params.resist_conv + params.resist_pipe;
    let k_p_initial = equivalent.pipe.k.value;
    let k_p = solve_root(
        k_p_initial,
        |k_p| {
            equivalent.pipe.k = wpmk(k_p);
            equivalent
                .update_thermal_resistance(None)
                .map_err(SolverError::objective)?;
            Ok(equivalent.fluid_to_pipe_resistance() - target)
        },
        Some(k_p_initial / 100.0),
        Some(k_p_initial * 10.0),
        config,
    )?;

    equivalent.pipe.k = wpmk(k_p);
    equivalent.update_thermal_resistance(None)?;

    Ok(equivalent)
}
