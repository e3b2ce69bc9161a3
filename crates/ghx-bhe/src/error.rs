//! Error types for heat exchanger models.

use ghx_core::ensure_finite;
use thiserror::Error;

/// Errors that can occur while building or updating a heat exchanger model.
#[derive(Error, Debug, Clone)]
pub enum BheError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Singular system: {what}")]
    Singular { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type BheResult<T> = Result<T, BheError>;

/// Ensure a computed value is finite, returning `BheError` if not.
pub fn check_finite(value: f64, what: &'static str) -> BheResult<()> {
    ensure_finite(value, what).map_err(|_| BheError::NonPhysical { what })?;
    Ok(())
}
