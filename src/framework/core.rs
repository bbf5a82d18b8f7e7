//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`StateEntity`]: The trait that all stateful components must implement.
//! - [`StateActor`]: The generic actor that owns one entity.
//! - [`StateClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any stateful component must implement to be managed by a [`StateActor`].
///
/// # Architecture Note
/// Each component here is a **singleton state machine** (one order ledger, one
/// selection machine, one credential slot), not a collection of records. The
/// actor therefore owns a single entity and routes commands to it, instead of
/// keying a store by id.
///
/// We use Associated Types (`Command`, `Event`, `Snapshot`) to enforce type
/// safety. A `Selection` actor accepts a `SelectionCommand`, and you can't
/// accidentally send it a `LedgerCommand`. The compiler prevents this class of
/// bugs entirely.
///
/// # Async & Context
/// `handle_command` is `#[async_trait]` so entities may perform asynchronous
/// work. The `Context` type allows "Late Binding" of dependencies (passing
/// them to `run()` instead of `new()`). Use `()` if no dependencies are needed.
#[async_trait]
pub trait StateEntity: Send + Sync + 'static {
    /// A request to mutate the entity.
    type Command: Send + Sync + Debug;

    /// The outcome reported for a handled command.
    type Event: Send + Sync + Debug;

    /// A read-only view of the current state.
    type Snapshot: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// Produce a point-in-time view of the state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Apply a command to the state, returning the resulting event.
    ///
    /// Invalid transitions should be reported through the entity's own
    /// `Event` vocabulary (e.g., an `Ignored` variant) rather than `Err`;
    /// `Err` is reserved for genuine failures.
    async fn handle_command(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Event, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// Two message shapes cover every interaction:
///
/// - **Command**: State mutation. Uses [`StateEntity::Command`] and replies
///   with the entity's [`StateEntity::Event`].
/// - **Snapshot (Read)**: Retrieval. Replies with a cloned view of the state.
#[derive(Debug)]
pub enum StateRequest<T: StateEntity> {
    Command {
        command: T::Command,
        respond_to: Response<T::Event>,
    },
    Snapshot {
        respond_to: Response<T::Snapshot>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a single state entity.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its messages *sequentially* in a loop, so we don't
/// need `Mutex` or `RwLock` for the state. Re-entrant triggers arrive as
/// ordinary queued messages and are rejected by the entity's own state checks.
pub struct StateActor<T: StateEntity> {
    receiver: mpsc::Receiver<StateRequest<T>>,
    state: T,
}

impl<T: StateEntity> StateActor<T> {
    pub fn new(buffer_size: usize, initial: T) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: initial,
        };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every command handler. This
    /// allows entities to access external dependencies that were created
    /// *after* the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Selection" instead of "meal_picker::model::selection::Selection")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Command { command, respond_to } => {
                    debug!(entity_type, ?command, "Command");
                    match self.state.handle_command(command, &context).await {
                        Ok(event) => {
                            debug!(entity_type, ?event, "Command ok");
                            let _ = respond_to.send(Ok(event));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Command failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                StateRequest::Snapshot { respond_to } => {
                    debug!(entity_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
            }
        }

        info!(entity_type, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`StateActor`].
pub struct StateClient<T: StateEntity> {
    sender: mpsc::Sender<StateRequest<T>>,
}

impl<T: StateEntity> Clone for StateClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: StateEntity> StateClient<T> {
    pub fn new(sender: mpsc::Sender<StateRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn command(&self, command: T::Command) -> Result<T::Event, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Command { command, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<T::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Debug, Default)]
    struct Turnstile {
        locked: bool,
        entries: u32,
    }

    #[derive(Debug)]
    enum TurnstileCommand {
        InsertCoin,
        Push,
    }

    #[derive(Debug, PartialEq)]
    enum TurnstileEvent {
        Unlocked,
        Passed,
        Blocked,
    }

    #[derive(Debug, PartialEq)]
    struct TurnstileSnapshot {
        locked: bool,
        entries: u32,
    }

    #[async_trait]
    impl StateEntity for Turnstile {
        type Command = TurnstileCommand;
        type Event = TurnstileEvent;
        type Snapshot = TurnstileSnapshot;
        type Context = ();

        fn snapshot(&self) -> TurnstileSnapshot {
            TurnstileSnapshot {
                locked: self.locked,
                entries: self.entries,
            }
        }

        async fn handle_command(
            &mut self,
            command: TurnstileCommand,
            _ctx: &(),
        ) -> Result<TurnstileEvent, String> {
            match command {
                TurnstileCommand::InsertCoin => {
                    self.locked = false;
                    Ok(TurnstileEvent::Unlocked)
                }
                TurnstileCommand::Push => {
                    if self.locked {
                        Ok(TurnstileEvent::Blocked)
                    } else {
                        self.locked = true;
                        self.entries += 1;
                        Ok(TurnstileEvent::Passed)
                    }
                }
            }
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_state_actor_round_trip() {
        let (actor, client) = StateActor::new(
            10,
            Turnstile {
                locked: true,
                entries: 0,
            },
        );
        tokio::spawn(actor.run(()));

        // 1. Push while locked: no state change
        let event = client.command(TurnstileCommand::Push).await.unwrap();
        assert_eq!(event, TurnstileEvent::Blocked);

        // 2. Coin then push
        let event = client.command(TurnstileCommand::InsertCoin).await.unwrap();
        assert_eq!(event, TurnstileEvent::Unlocked);
        let event = client.command(TurnstileCommand::Push).await.unwrap();
        assert_eq!(event, TurnstileEvent::Passed);

        // 3. Snapshot reflects the sequence
        let snap = client.snapshot().await.unwrap();
        assert_eq!(
            snap,
            TurnstileSnapshot {
                locked: true,
                entries: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = StateActor::new(10, Turnstile::default());
        drop(actor);

        let result = client.command(TurnstileCommand::Push).await;
        assert_eq!(result, Err(FrameworkError::ActorClosed));
    }
}
