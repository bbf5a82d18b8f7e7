//! Pure domain types managed by the actors in this crate.

pub mod ledger;
pub mod menu;
pub mod selection;
pub mod session;

pub use ledger::*;
pub use menu::*;
pub use selection::*;
pub use session::*;
