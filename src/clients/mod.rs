//! Type-safe wrappers around [`StateClient`](crate::framework::StateClient).

pub mod actor_client;
pub mod ledger_client;
pub mod selection_client;
pub mod session_client;

pub use actor_client::*;
pub use ledger_client::*;
pub use selection_client::*;
pub use session_client::*;
