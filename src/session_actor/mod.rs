//! Credential-session resource logic and entity implementation.

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use error::*;

use crate::clients::SessionClient;
use crate::framework::StateActor;
use crate::model::Session;

/// Creates a new session actor and its client, optionally seeded with a
/// credential restored from session-scoped storage.
pub fn new(restored: Option<String>) -> (StateActor<Session>, SessionClient) {
    let (actor, generic_client) = StateActor::new(32, Session::restored(restored));
    let client = SessionClient::new(generic_client);

    (actor, client)
}
