//! Entity trait implementation for the order ledger.
//!
//! This module contains the [`StateEntity`] implementation that enables
//! [`OrderLedger`] to be managed by the generic
//! [`StateActor`](crate::framework::StateActor).

use async_trait::async_trait;

use super::commands::{LedgerCommand, LedgerEvent, LedgerSnapshot};
use crate::framework::StateEntity;
use crate::model::OrderLedger;

#[async_trait]
impl StateEntity for OrderLedger {
    type Command = LedgerCommand;
    type Event = LedgerEvent;
    type Snapshot = LedgerSnapshot;
    type Context = ();

    fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            counts: self.counts().clone(),
            total: self.total(),
        }
    }

    async fn handle_command(
        &mut self,
        command: LedgerCommand,
        _ctx: &(),
    ) -> Result<LedgerEvent, String> {
        match command {
            LedgerCommand::Increment(item_id) => {
                let count = self.increment(&item_id);
                Ok(LedgerEvent::Count { item_id, count })
            }
            LedgerCommand::Decrement(item_id) => {
                let count = self.decrement(&item_id);
                Ok(LedgerEvent::Count { item_id, count })
            }
            LedgerCommand::Clear => {
                self.clear();
                Ok(LedgerEvent::Cleared)
            }
        }
    }
}
