//! Command vocabulary for the ledger actor.
//!
//! These are the only operations that mutate the ledger; everything else is
//! read through [`LedgerSnapshot`].

use std::collections::HashMap;

/// Mutating operations on the order ledger.
#[derive(Debug, Clone)]
pub enum LedgerCommand {
    /// Adds one order for the item, creating the entry if absent.
    Increment(String),
    /// Removes one order, floored at zero. Absent items are a no-op.
    Decrement(String),
    /// Empties the ledger.
    Clear,
}

/// Results from LedgerCommands.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    /// The item's count after an increment or decrement.
    Count { item_id: String, count: u32 },
    /// Result of a Clear command.
    Cleared,
}

/// Point-in-time view of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSnapshot {
    pub counts: HashMap<String, u32>,
    pub total: u32,
}
