//! Error types for the selection actor.

use thiserror::Error;

/// Errors that can occur while driving the selection flows.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SelectionError {
    /// The external recommendation call failed before producing a result.
    /// The machine has returned to Idle.
    #[error("AI recommendation failed: {0}. Check your credential and the service diagnostics.")]
    Recommendation(String),

    /// The spin driver finished its ticks without the actor committing a
    /// result. Indicates the machine was reset underneath the driver.
    #[error("Spin finished without a committed result")]
    SpinIncomplete,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SelectionError {
    fn from(msg: String) -> Self {
        SelectionError::ActorCommunicationError(msg)
    }
}
