//! Generic actor framework for singleton state machines.
//!
//! This module provides the core building blocks for creating type-safe actor
//! systems where each actor owns one state entity and processes commands
//! sequentially.
//!
//! # Main Components
//!
//! - [`StateEntity`] - Trait that stateful components implement to be managed by actors
//! - [`StateActor`] - Generic actor that owns an entity
//! - [`StateClient`] - Type-safe client handle
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
