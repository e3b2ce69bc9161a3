//! ghx-solver: bounded scalar root finding.
//!
//! Provides a derivative-free bracketed root solver (Brent's method) with a
//! deterministic bound-fallback policy: when the objective does not change
//! sign across the bracket, the nearest-feasible bound is returned instead
//! of an error. The quantities solved for in this workspace (thermal
//! conductivities) are strictly positive, which is what the default bracket
//! of `x/100 .. x*10` assumes.

pub mod bounded;
pub mod brent;
pub mod error;

pub use bounded::solve_root;
pub use brent::{RootSolverConfig, brent};
pub use error::{SolverError, SolverResult};
