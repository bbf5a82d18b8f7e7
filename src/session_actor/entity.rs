//! Entity trait implementation for the credential session.

use async_trait::async_trait;

use super::commands::{SessionCommand, SessionEvent, SessionSnapshot};
use crate::framework::StateEntity;
use crate::model::Session;

#[async_trait]
impl StateEntity for Session {
    type Command = SessionCommand;
    type Event = SessionEvent;
    type Snapshot = SessionSnapshot;
    type Context = ();

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            credential: self.credential().map(|c| c.to_string()),
        }
    }

    async fn handle_command(
        &mut self,
        command: SessionCommand,
        _ctx: &(),
    ) -> Result<SessionEvent, String> {
        match command {
            SessionCommand::Store(credential) => {
                self.store(credential);
                Ok(SessionEvent::Stored)
            }
            SessionCommand::Clear => {
                self.clear();
                Ok(SessionEvent::Cleared)
            }
        }
    }
}
