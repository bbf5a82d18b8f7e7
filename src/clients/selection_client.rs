use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StateClient};
use crate::gemini::GeminiClient;
use crate::model::{PickResult, Selection, SPIN_TICKS, SPIN_TICK_INTERVAL};
use crate::selection_actor::{SelectionCommand, SelectionError, SelectionEvent};

/// Client for interacting with the selection actor.
///
/// Beyond plain message passing this client drives the two multi-step flows:
/// the spin timer for random picks, and the external AI round-trip. The actor
/// itself never blocks on either, so a trigger arriving mid-flow is rejected
/// by its Idle-only check the moment it is dequeued.
#[derive(Clone)]
pub struct SelectionClient {
    inner: StateClient<Selection>,
    gemini: Arc<GeminiClient>,
}

impl SelectionClient {
    pub fn new(inner: StateClient<Selection>, gemini: Arc<GeminiClient>) -> Self {
        Self { inner, gemini }
    }

    /// Runs the random-pick flow to completion: 16 animation ticks at 100 ms,
    /// the last of which commits a uniformly random dish.
    ///
    /// Returns `Ok(None)` when the machine was not Idle (the trigger was a
    /// no-op). The interval is dropped exactly once, when the flow ends.
    #[instrument(skip(self))]
    pub async fn random_pick(&self) -> Result<Option<PickResult>, SelectionError> {
        debug!("Sending request");
        match self.send(SelectionCommand::StartRandom).await? {
            SelectionEvent::Accepted => {}
            SelectionEvent::Ignored => return Ok(None),
            other => return Err(unexpected(other)),
        }

        let mut ticker = tokio::time::interval(SPIN_TICK_INTERVAL);
        // The first tick resolves immediately; consume it so every spin tick
        // waits a full interval.
        ticker.tick().await;

        for _ in 0..SPIN_TICKS {
            ticker.tick().await;
            match self.send(SelectionCommand::AdvanceSpin).await? {
                SelectionEvent::Cycling(item) => {
                    debug!(highlighted = %item.id, "Spin tick");
                }
                SelectionEvent::Committed(result) => {
                    info!(item = %result.item.id, "Random pick committed");
                    return Ok(Some(result));
                }
                // The machine left RandomSpinning underneath us (e.g., a
                // concurrent reset).
                SelectionEvent::Ignored => return Err(SelectionError::SpinIncomplete),
                other => return Err(unexpected(other)),
            }
        }

        Err(SelectionError::SpinIncomplete)
    }

    /// Runs the AI-recommendation flow to completion.
    ///
    /// Returns `Ok(None)` when the machine was not Idle. On adapter-level
    /// failure the machine is returned to Idle and the error is surfaced for
    /// user-facing messaging; note that transport and parse failures never
    /// reach this path because the adapter substitutes a random pick itself.
    #[instrument(skip(self, credential))]
    pub async fn recommend(
        &self,
        condition: &str,
        credential: &str,
    ) -> Result<Option<PickResult>, SelectionError> {
        debug!("Sending request");
        match self.send(SelectionCommand::StartAi).await? {
            SelectionEvent::Accepted => {}
            SelectionEvent::Ignored => return Ok(None),
            other => return Err(unexpected(other)),
        }

        let recommendation = match self.gemini.recommend(condition, credential).await {
            Ok(recommendation) => recommendation,
            Err(e) => {
                warn!(error = %e, "AI recommendation failed, returning to idle");
                self.send(SelectionCommand::AbortAi).await?;
                return Err(SelectionError::Recommendation(e.to_string()));
            }
        };

        match self
            .send(SelectionCommand::CompleteAi {
                menu_name: recommendation.menu_name,
                reason: recommendation.reason,
            })
            .await?
        {
            SelectionEvent::Committed(result) => {
                info!(item = %result.item.id, "AI recommendation committed");
                Ok(Some(result))
            }
            other => Err(unexpected(other)),
        }
    }

    /// Dismisses the current result and returns the machine to Idle.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), SelectionError> {
        debug!("Sending request");
        match self.send(SelectionCommand::Reset).await? {
            SelectionEvent::Idled => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    async fn send(&self, command: SelectionCommand) -> Result<SelectionEvent, SelectionError> {
        self.inner.command(command).await.map_err(Self::map_error)
    }
}

fn unexpected(event: SelectionEvent) -> SelectionError {
    SelectionError::ActorCommunicationError(format!("Unexpected reply: {event:?}"))
}

#[async_trait]
impl ActorClient<Selection> for SelectionClient {
    type Error = SelectionError;

    fn inner(&self) -> &StateClient<Selection> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SelectionError::ActorCommunicationError(e.to_string())
    }
}
