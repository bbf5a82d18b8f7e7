//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the actor system: creating
//! the actors, wiring the shared AI adapter into the selection client,
//! enforcing the session gate, and shutting everything down cleanly.
//!
//! ## The Session Gate
//!
//! All selection flows sit behind a credential gate:
//!
//! 1. At startup a previously stored credential may be restored; if present
//!    the gate is already open.
//! 2. Otherwise [`MealSystem::login`] must validate a credential with the
//!    external service before anything else works.
//! 3. [`MealSystem::logout`] clears the credential and resets selection and
//!    ledger state to initial.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for all actor tasks to finish
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging for the entire system;
//! see the [`tracing`] module for the format and `RUST_LOG` examples.

pub mod meal_system;
pub mod tracing;

pub use meal_system::*;
pub use self::tracing::*;
