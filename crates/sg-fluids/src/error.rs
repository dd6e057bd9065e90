//! Fluid property errors.

use sg_core::Real;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during equation-of-state evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Input outside the validity domain (non-positive density or
    /// temperature, non-positive stiffened pressure, non-finite input).
    #[error("Outside validity domain: {what} (value={value})")]
    Domain { what: &'static str, value: Real },

    /// Iterative inversion did not reach its residual tolerance.
    #[error("Convergence failed for {what} after {iterations} iterations (residual={residual:e})")]
    ConvergenceFailed {
        what: &'static str,
        iterations: usize,
        residual: Real,
    },

    /// Parameter set violates the model constraints.
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: String },
}

impl FluidError {
    pub(crate) fn domain(what: &'static str, value: Real) -> Self {
        Self::Domain { what, value }
    }

    pub(crate) fn config(what: impl Into<String>) -> Self {
        Self::InvalidConfig { what: what.into() }
    }

    /// True for the error kind a caller may retry with a different seed.
    pub fn is_convergence(&self) -> bool {
        matches!(self, Self::ConvergenceFailed { .. })
    }
}
