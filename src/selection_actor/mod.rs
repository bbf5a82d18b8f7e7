//! Selection-machine resource logic and entity implementation.

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use error::*;

use std::sync::Arc;

use crate::clients::SelectionClient;
use crate::framework::StateActor;
use crate::gemini::GeminiClient;
use crate::model::{Catalog, Selection};

/// Creates a new selection actor and its client.
///
/// The Gemini client is held by the [`SelectionClient`], not the actor: the
/// external round-trip runs caller-side so the actor stays responsive and
/// re-entrant triggers are rejected immediately.
pub fn new(catalog: Catalog, gemini: Arc<GeminiClient>) -> (StateActor<Selection>, SelectionClient) {
    let (actor, generic_client) = StateActor::new(32, Selection::new(catalog));
    let client = SelectionClient::new(generic_client, gemini);

    (actor, client)
}
