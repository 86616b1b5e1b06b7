//! Error types shared by every fallible blastwave operation.

use thiserror::Error;

use crate::utils::allocator::SurfaceId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlastError {
    #[error("invalid {name} = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid mesh: {0}")]
    InvalidMesh(String),

    #[error("unknown surface: {0:?}")]
    UnknownSurface(SurfaceId),

    #[error("detonation worker panicked")]
    DetonationPanicked,
}

impl BlastError {
    /// Rejects anything that is not a finite, strictly positive number.
    pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(Self::InvalidArgument {
                name,
                value,
                reason: "must be finite",
            });
        }
        if value <= 0.0 {
            return Err(Self::InvalidArgument {
                name,
                value,
                reason: "must be greater than zero",
            });
        }
        Ok(value)
    }
}

pub type Result<T> = std::result::Result<T, BlastError>;
