//! ghx-bhe: steady-state borehole heat exchanger thermal-network models.
//!
//! Provides:
//! - convective film coefficient correlations (circular pipe and annulus)
//! - a line-source (zeroth-order multipole) resistance network for grouted
//!   pipes inside a borehole
//! - single U-tube, multiple U-tube, and coaxial heat exchanger models
//!   exposing fluid-to-pipe and effective borehole resistances
//!
//! Every model recomputes its resistances on demand from its current
//! descriptors; callers mutate pipe or grout conductivity and then call
//! `update_thermal_resistance` to refresh the derived values.

pub mod coaxial;
pub mod convection;
pub mod error;
pub mod multiple_u_tube;
pub mod network;
pub mod single_u_tube;
pub mod traits;
pub mod variant;

mod u_tube;

pub use coaxial::CoaxialBhe;
pub use error::{BheError, BheResult};
pub use multiple_u_tube::MultipleUTube;
pub use single_u_tube::SingleUTube;
pub use traits::BoreholeHeatExchanger;
pub use variant::AnyBhe;
