//! Variant dispatch for the equivalence pipeline.

use ghx_bhe::{AnyBhe, SingleUTube};
use ghx_solver::RootSolverConfig;

use crate::builder::equivalent_single_u_tube;
use crate::error::{EquivError, EquivResult};
use crate::matcher::match_effective_borehole_resistance;
use crate::volumes::{coaxial_effective_params, u_tube_effective_params};

/// Compute the equivalent single U-tube for any supported exchanger with
/// the default solver configuration.
pub fn compute_equivalent(bhe: &AnyBhe) -> EquivResult<SingleUTube> {
    compute_equivalent_with(bhe, &RootSolverConfig::default())
}

/// Compute the equivalent single U-tube for any supported exchanger.
///
/// A single U-tube passes through as an equal copy; multiple U-tube and
/// coaxial exchangers run the extract → build → match pipeline. The source
/// is never mutated.
pub fn compute_equivalent_with(
    bhe: &AnyBhe,
    config: &RootSolverConfig,
) -> EquivResult<SingleUTube> {
    match bhe {
        AnyBhe::SingleUTube(tube) => Ok(tube.clone()),
        AnyBhe::MultipleUTube(tube) => {
            let params = u_tube_effective_params(&tube.pipe, tube.film_coefficient());
            let mut equivalent = equivalent_single_u_tube(bhe, &params, config)?;
            match_effective_borehole_resistance(tube, &mut equivalent, config)?;
            Ok(equivalent)
        }
        AnyBhe::Coaxial(tube) => {
            let params = coaxial_effective_params(tube);
            let mut equivalent = equivalent_single_u_tube(bhe, &params, config)?;
            match_effective_borehole_resistance(tube, &mut equivalent, config)?;
            Ok(equivalent)
        }
        _ => Err(EquivError::UnsupportedVariant { kind: bhe.kind() }),
    }
}
