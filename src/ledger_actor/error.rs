//! Error types for the ledger actor.

use thiserror::Error;

/// Errors that can occur during ledger operations.
///
/// Ledger commands themselves cannot fail (decrement floors at zero), so the
/// only failure mode is losing the actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LedgerError {
    fn from(msg: String) -> Self {
        LedgerError::ActorCommunicationError(msg)
    }
}
