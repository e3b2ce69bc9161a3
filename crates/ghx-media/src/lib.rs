//! ghx-media: property containers for ground heat exchanger models.
//!
//! Provides the passive descriptors the thermal-network models are built
//! from: circulating fluid, pipe geometry (U-tube and coaxial), grout, soil,
//! and the borehole itself. All quantities are SI, carried as uom types.

pub mod borehole;
pub mod fluid;
pub mod ground;
pub mod pipe;

pub use borehole::Borehole;
pub use fluid::Fluid;
pub use ground::{Grout, Soil};
pub use pipe::{CoaxialPipe, Pipe};
