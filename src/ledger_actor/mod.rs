//! Order-ledger resource logic and entity implementation.

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use error::*;

use crate::clients::LedgerClient;
use crate::framework::StateActor;
use crate::model::OrderLedger;

/// Creates a new ledger actor and its client.
pub fn new() -> (StateActor<OrderLedger>, LedgerClient) {
    let (actor, generic_client) = StateActor::new(32, OrderLedger::new());
    let client = LedgerClient::new(generic_client);

    (actor, client)
}
