use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StateClient};
use crate::ledger_actor::{LedgerCommand, LedgerError, LedgerEvent};
use crate::model::OrderLedger;

/// Client for interacting with the order-ledger actor.
#[derive(Clone)]
pub struct LedgerClient {
    inner: StateClient<OrderLedger>,
}

impl LedgerClient {
    pub fn new(inner: StateClient<OrderLedger>) -> Self {
        Self { inner }
    }

    /// Adds one order for the item. Returns the new count.
    #[instrument(skip(self))]
    pub async fn increment(&self, item_id: &str) -> Result<u32, LedgerError> {
        debug!("Sending request");
        self.send_count(LedgerCommand::Increment(item_id.to_string()))
            .await
    }

    /// Removes one order for the item, floored at zero. Returns the
    /// resulting count (0 when the entry was removed or absent).
    #[instrument(skip(self))]
    pub async fn decrement(&self, item_id: &str) -> Result<u32, LedgerError> {
        debug!("Sending request");
        self.send_count(LedgerCommand::Decrement(item_id.to_string()))
            .await
    }

    /// Empties the ledger.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), LedgerError> {
        debug!("Sending request");
        match self.send(LedgerCommand::Clear).await? {
            LedgerEvent::Cleared => Ok(()),
            other => Err(LedgerError::ActorCommunicationError(format!(
                "Unexpected reply: {other:?}"
            ))),
        }
    }

    /// Sum of all per-item counts.
    pub async fn total(&self) -> Result<u32, LedgerError> {
        Ok(ActorClient::snapshot(self).await?.total)
    }

    async fn send(&self, command: LedgerCommand) -> Result<LedgerEvent, LedgerError> {
        self.inner.command(command).await.map_err(Self::map_error)
    }

    async fn send_count(&self, command: LedgerCommand) -> Result<u32, LedgerError> {
        match self.send(command).await? {
            LedgerEvent::Count { count, .. } => Ok(count),
            other => Err(LedgerError::ActorCommunicationError(format!(
                "Unexpected reply: {other:?}"
            ))),
        }
    }
}

#[async_trait]
impl ActorClient<OrderLedger> for LedgerClient {
    type Error = LedgerError;

    fn inner(&self) -> &StateClient<OrderLedger> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        LedgerError::ActorCommunicationError(e.to_string())
    }
}
