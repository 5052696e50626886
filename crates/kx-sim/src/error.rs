//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while driving a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    /// A model variant does not implement a required capability.
    /// Fatal; the run terminates and the error surfaces to the caller.
    #[error("Not implemented: {what}")]
    NotImplemented { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Core(#[from] kx_core::KxError),
}

pub type SimResult<T> = Result<T, SimError>;
