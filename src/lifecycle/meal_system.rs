use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::clients::{LedgerClient, SelectionClient, SessionClient};
use crate::gemini::{CredentialError, GeminiClient};
use crate::ledger_actor::LedgerError;
use crate::model::{Catalog, PickResult};
use crate::selection_actor::SelectionError;
use crate::session_actor::SessionError;

/// Context text substituted when the user leaves the free-text field empty.
pub const DEFAULT_CONDITION: &str = "Great work at training today!";

/// Errors surfaced by the gated system operations.
#[derive(Debug, Error)]
pub enum GateError {
    /// No credential is stored; the gate is still closed.
    #[error("Locked: validate a credential first")]
    Locked,

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// The main runtime orchestrator for the meal-picker system.
///
/// `MealSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping all actors
/// - **The Session Gate**: credential validation, storage, and logout
/// - **Gated Flows**: random picks, AI recommendations, and order-tally
///   mutations, all of which require an open gate
///
/// # Architecture
///
/// Three actors run underneath:
/// - **Ledger actor**: per-item order counts
/// - **Selection actor**: the Idle/Spinning/Thinking/Result state machine
/// - **Session actor**: the credential for the external AI service
///
/// # Example
///
/// ```ignore
/// let system = MealSystem::new(None);
/// system.login(&api_key).await?;
/// if let Some(pick) = system.random_pick().await? {
///     system.add_order(&pick.item.id).await?;
/// }
/// system.shutdown().await?;
/// ```
pub struct MealSystem {
    /// Client for the order-ledger actor. Kept private: every mutation goes
    /// through the gated order methods.
    ledger: LedgerClient,

    /// Client for the selection actor
    pub selection: SelectionClient,

    /// Client for the session actor
    pub session: SessionClient,

    /// Adapter for the external AI service (shared with the selection client)
    gemini: Arc<GeminiClient>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl MealSystem {
    /// Creates and initializes a new `MealSystem` with all actors running.
    ///
    /// `restored_credential` is a credential recovered from session-scoped
    /// storage. When present, the gate is already open and no re-validation
    /// is performed.
    pub fn new(restored_credential: Option<String>) -> Self {
        Self::with_gemini(GeminiClient::new(Catalog::standard()), restored_credential)
    }

    /// Like [`MealSystem::new`] but with a caller-supplied adapter, so tests
    /// can point it at an unreachable endpoint.
    pub fn with_gemini(gemini: GeminiClient, restored_credential: Option<String>) -> Self {
        let catalog = gemini.catalog().clone();
        let gemini = Arc::new(gemini);

        // 1. Create actors
        let (ledger_actor, ledger) = crate::ledger_actor::new();
        let (selection_actor, selection) = crate::selection_actor::new(catalog, gemini.clone());
        let (session_actor, session) = crate::session_actor::new(restored_credential);

        // 2. Start actors (none of them has runtime dependencies)
        let handles = vec![
            tokio::spawn(ledger_actor.run(())),
            tokio::spawn(selection_actor.run(())),
            tokio::spawn(session_actor.run(())),
        ];

        Self {
            ledger,
            selection,
            session,
            gemini,
            handles,
        }
    }

    /// Whether the gate is open (a credential is stored).
    pub async fn is_authenticated(&self) -> Result<bool, GateError> {
        Ok(self.session.is_authenticated().await?)
    }

    /// Validates a credential against the external service and stores it.
    ///
    /// Credentials shorter than the syntactic minimum are rejected before any
    /// network call.
    pub async fn login(&self, credential: &str) -> Result<(), GateError> {
        self.gemini.validate_credential(credential).await?;
        self.session.store(credential.trim()).await?;
        info!("Credential validated and stored");
        Ok(())
    }

    /// Ends the session: clears the credential and resets selection and
    /// ledger state to initial.
    pub async fn logout(&self) -> Result<(), GateError> {
        self.session.clear().await?;
        self.selection.reset().await?;
        self.ledger.clear().await?;
        info!("Session ended, state reset");
        Ok(())
    }

    /// Runs the random-pick flow. `Ok(None)` means the trigger was ignored
    /// because the machine was not Idle.
    pub async fn random_pick(&self) -> Result<Option<PickResult>, GateError> {
        self.require_credential().await?;
        Ok(self.selection.random_pick().await?)
    }

    /// Runs the AI-recommendation flow with the stored credential. An empty
    /// condition falls back to [`DEFAULT_CONDITION`].
    pub async fn recommend(&self, condition: &str) -> Result<Option<PickResult>, GateError> {
        let credential = self.require_credential().await?;
        let condition = if condition.trim().is_empty() {
            DEFAULT_CONDITION
        } else {
            condition
        };
        Ok(self.selection.recommend(condition, &credential).await?)
    }

    /// Adds one order for the item. Returns the new count.
    pub async fn add_order(&self, item_id: &str) -> Result<u32, GateError> {
        self.require_credential().await?;
        Ok(self.ledger.increment(item_id).await?)
    }

    /// Removes one order for the item, floored at zero. Returns the
    /// resulting count.
    pub async fn remove_order(&self, item_id: &str) -> Result<u32, GateError> {
        self.require_credential().await?;
        Ok(self.ledger.decrement(item_id).await?)
    }

    /// Sum of all per-item counts. Reading the tally is harmless, so this is
    /// not gated; after logout it reports zero.
    pub async fn order_total(&self) -> Result<u32, GateError> {
        Ok(self.ledger.total().await?)
    }

    async fn require_credential(&self) -> Result<String, GateError> {
        self.session.credential().await?.ok_or(GateError::Locked)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops all clients, which closes their channels; each actor detects the
    /// closed channel and exits its event loop. Then waits for every actor
    /// task to complete.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.ledger);
        drop(self.selection);
        drop(self.session);
        drop(self.gemini);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
