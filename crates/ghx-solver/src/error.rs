//! Error types for root-finding operations.

use thiserror::Error;

/// Errors that can occur during a bounded root solve.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Non-finite objective value at x = {x}: {value}")]
    NonFinite { x: f64, value: f64 },

    #[error("Invalid bracket: lower = {lower}, upper = {upper}")]
    InvalidBracket { lower: f64, upper: f64 },

    #[error("Objective evaluation failed: {message}")]
    Objective { message: String },
}

impl SolverError {
    /// Wrap a foreign error raised inside an objective closure.
    pub fn objective(err: impl std::fmt::Display) -> Self {
        SolverError::Objective {
            message: err.to_string(),
        }
    }
}

pub type SolverResult<T> = Result<T, SolverError>;
