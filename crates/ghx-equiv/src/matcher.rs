//! Effective borehole resistance matching.

use ghx_bhe::{BoreholeHeatExchanger, SingleUTube};
use ghx_core::wpmk;
use ghx_solver::{RootSolverConfig, SolverError, solve_root};

use crate::error::EquivResult;

/// Physically plausible grout conductivity range, W/m·K
const K_GROUT_LOWER: f64 = 1e-2;
const K_GROUT_UPPER: f64 = 7.0;

/// Vary the candidate's grout conductivity until its effective borehole
/// resistance equals the reference's.
///
/// The reference stays read-only throughout; only the candidate is mutated,
/// and it is left with the matched conductivity and freshly recomputed
/// resistances.
pub fn match_effective_borehole_resistance(
    reference: &impl BoreholeHeatExchanger,
    candidate: &mut SingleUTube,
    config: &RootSolverConfig,
) -> EquivResult<()> {
    let resist_bh_reference = reference.effective_borehole_resistance();

    let k_g = solve_root(
        candidate.grout.k.value,
        |k_g| {
            candidate.grout.k = wpmk(k_g);
            candidate
                .update_thermal_resistance(None)
                .map_err(SolverError::objective)?;
            Ok(resist_bh_reference - candidate.effective_borehole_resistance())
        },
        Some(K_GROUT_LOWER),
        Some(K_GROUT_UPPER),
        config,
    )?;

    candidate.grout.k = wpmk(k_g);
    candidate.update_thermal_resistance(None)?;

    Ok(())
}
