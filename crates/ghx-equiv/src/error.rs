//! Error types for the equivalence pipeline.

use ghx_bhe::BheError;
use ghx_solver::SolverError;
use thiserror::Error;

/// Errors that can occur while computing an equivalent single U-tube.
#[derive(Error, Debug)]
pub enum EquivError {
    #[error("No equivalence pipeline for heat exchanger variant: {kind}")]
    UnsupportedVariant { kind: &'static str },

    #[error("Root solve failed: {0}")]
    Solver(#[from] SolverError),

    #[error("Heat exchanger model error: {0}")]
    Bhe(#[from] BheError),
}

pub type EquivResult<T> = Result<T, EquivError>;
