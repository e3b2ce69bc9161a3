//! ghx-equiv: thermal equivalence for borehole heat exchangers.
//!
//! Whole-field simulation runs on the single U-tube network only; this crate
//! reduces multiple U-tube and coaxial exchangers to a thermally equivalent
//! single U-tube that preserves fluid volume, pipe volume, convective
//! resistance, and effective borehole resistance.
//!
//! Pipeline: extract lumped volumes and resistances from the source
//! geometry, derive an equivalent two-pipe cross-section in closed form,
//! refine the pipe conductivity so the fluid-to-pipe resistances match, then
//! refine the grout conductivity so the effective borehole resistances
//! match. The source exchanger is never mutated.

pub mod builder;
pub mod dispatch;
pub mod error;
pub mod matcher;
pub mod volumes;

pub use builder::equivalent_single_u_tube;
pub use dispatch::{compute_equivalent, compute_equivalent_with};
pub use error::{EquivError, EquivResult};
pub use matcher::match_effective_borehole_resistance;
pub use volumes::{EffectiveParams, coaxial_effective_params, u_tube_effective_params};
