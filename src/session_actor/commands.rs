//! Command vocabulary for the session actor.

/// Operations on the credential session.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Stores the credential for the rest of the session.
    Store(String),
    /// Forgets the credential (logout).
    Clear,
}

/// Results from SessionCommands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Stored,
    Cleared,
}

/// Point-in-time view of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub credential: Option<String>,
}
