use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, StateClient};
use crate::model::Session;
use crate::session_actor::{SessionCommand, SessionError, SessionEvent};

/// Client for interacting with the credential-session actor.
#[derive(Clone)]
pub struct SessionClient {
    inner: StateClient<Session>,
}

impl SessionClient {
    pub fn new(inner: StateClient<Session>) -> Self {
        Self { inner }
    }

    /// Stores a validated credential for the rest of the session.
    #[instrument(skip(self, credential))]
    pub async fn store(&self, credential: &str) -> Result<(), SessionError> {
        debug!("Sending request");
        match self
            .inner
            .command(SessionCommand::Store(credential.to_string()))
            .await
            .map_err(Self::map_error)?
        {
            SessionEvent::Stored => Ok(()),
            other => Err(SessionError::ActorCommunicationError(format!(
                "Unexpected reply: {other:?}"
            ))),
        }
    }

    /// Forgets the stored credential.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<(), SessionError> {
        debug!("Sending request");
        match self
            .inner
            .command(SessionCommand::Clear)
            .await
            .map_err(Self::map_error)?
        {
            SessionEvent::Cleared => Ok(()),
            other => Err(SessionError::ActorCommunicationError(format!(
                "Unexpected reply: {other:?}"
            ))),
        }
    }

    /// The stored credential, if any.
    pub async fn credential(&self) -> Result<Option<String>, SessionError> {
        Ok(ActorClient::snapshot(self).await?.credential)
    }

    pub async fn is_authenticated(&self) -> Result<bool, SessionError> {
        Ok(self.credential().await?.is_some())
    }
}

#[async_trait]
impl ActorClient<Session> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &StateClient<Session> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SessionError::ActorCommunicationError(e.to_string())
    }
}
