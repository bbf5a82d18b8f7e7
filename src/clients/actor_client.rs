use crate::framework::{FrameworkError, StateClient, StateEntity};
use async_trait::async_trait;

/// Trait for actor-specific clients to inherit the standard read operation.
///
/// This trait reduces boilerplate by providing a default implementation for
/// `snapshot` and a single place to map framework errors into each client's
/// own error type.
#[async_trait]
pub trait ActorClient<T: StateEntity>: Send + Sync {
    /// The actor-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a point-in-time view of the actor's state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
