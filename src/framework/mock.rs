//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`MockClient`] to get a client backed by scripted responses instead of
//! a live [`StateActor`](crate::framework::StateActor), or
//! [`create_mock_client`] to inspect raw requests on a channel.

use crate::framework::{FrameworkError, StateClient, StateEntity, StateRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: StateEntity> {
    Command {
        response: Result<T::Event, FrameworkError>,
    },
    Snapshot {
        response: Result<T::Snapshot, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Selection>::new();
/// mock.expect_command().return_ok(SelectionEvent::Accepted);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: StateEntity> {
    client: StateClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StateEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = {
                    let mut exps = expectations_clone.lock().unwrap();
                    exps.pop_front()
                };

                match (request, expectation) {
                    (
                        StateRequest::Command { command: _, respond_to },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StateRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<T> {
        self.client.clone()
    }

    /// Expects a `command` operation.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<T> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` operation.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: StateEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `command` expectations.
pub struct CommandExpectationBuilder<T: StateEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StateEntity> CommandExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, event: T::Event) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command {
            response: Ok(event),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Command {
            response: Err(error),
        });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: StateEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: StateEntity> SnapshotExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, snapshot: T::Snapshot) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Ok(snapshot),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit/integration tests, we don't want to spin up a full `StateActor` if
/// we are just testing the *Client* logic. This client sends messages to a
/// channel we control; we can then inspect the messages arriving on that
/// channel and respond deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: StateEntity>(
    buffer_size: usize,
) -> (StateClient<T>, mpsc::Receiver<StateRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Command request.
pub async fn expect_command<T: StateEntity>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<(
    T::Command,
    tokio::sync::oneshot::Sender<Result<T::Event, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Command { command, respond_to }) => Some((command, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger_actor::{LedgerCommand, LedgerEvent};
    use crate::model::OrderLedger;

    #[tokio::test]
    async fn test_mock_client_raw_channel() {
        let (client, mut receiver) = create_mock_client::<OrderLedger>(10);

        let command_task = tokio::spawn(async move {
            client
                .command(LedgerCommand::Increment("kimchi".to_string()))
                .await
        });

        let (command, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected Command request");
        assert!(matches!(command, LedgerCommand::Increment(ref id) if id == "kimchi"));
        responder
            .send(Ok(LedgerEvent::Count {
                item_id: "kimchi".to_string(),
                count: 1,
            }))
            .unwrap();

        let result = command_task.await.unwrap();
        assert!(matches!(result, Ok(LedgerEvent::Count { count: 1, .. })));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<OrderLedger>::new();

        mock.expect_command().return_ok(LedgerEvent::Cleared);

        let client = mock.client();
        let event = client.command(LedgerCommand::Clear).await.unwrap();
        assert!(matches!(event, LedgerEvent::Cleared));

        mock.verify();
    }
}
