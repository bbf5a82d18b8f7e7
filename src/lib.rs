//! # Meal Picker
//!
//! > **A team meal-selection service built from resource-oriented actors.**
//!
//! This crate implements the Green FC lunch desk: a fixed four-dish recovery
//! menu, an order tally, and three ways to settle on a dish: pick it
//! yourself, spin a random selector, or ask the AI nutrition coach. Each
//! stateful component runs as a Tokio actor with exclusive ownership of its
//! state, so there is not a single lock in the crate.
//!
//! ## 🏗️ Design Notes
//!
//! ### Why actors for UI-shaped state?
//! The selection machine and the order ledger are classic single-threaded
//! reducers: every mutation flows through one place, and re-entrant triggers
//! must be no-ops. An actor gives exactly that: messages are processed
//! sequentially, and a "start" command that arrives while the machine is
//! busy is answered with `Ignored` instead of corrupting state.
//!
//! ### Two failure layers for the AI call
//! The [`gemini`] adapter swallows transport and parse failures itself and
//! substitutes a random dish with an apology. Only credential problems reach
//! the caller, where the selection client aborts the flow and returns the
//! machine to Idle. Both layers are deliberate and mirror each other in the
//! tests.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`StateActor`](framework::StateActor) and
//! [`StateEntity`](framework::StateEntity) trait that power every component,
//! plus a [`MockClient`](framework::mock::MockClient) for tests.
//!
//! ### 2. The Domain ([`model`])
//! Pure data: the [`Catalog`](model::Catalog) of menu items, the
//! [`OrderLedger`](model::OrderLedger), the
//! [`Selection`](model::Selection) state machine, and the credential
//! [`Session`](model::Session).
//!
//! ### 3. The Implementation ([`ledger_actor`], [`selection_actor`], [`session_actor`])
//! `StateEntity` implementations, command vocabularies, and per-actor error
//! types.
//!
//! ### 4. The Interface ([`clients`])
//! Typed wrappers that hide raw message passing. The
//! [`SelectionClient`](clients::SelectionClient) also drives the spin timer
//! and the AI round-trip.
//!
//! ### 5. The Outside World ([`gemini`])
//! The adapter for the external generative-AI endpoint: credential probe,
//! JSON-constrained recommendation call, internal random fallback.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`MealSystem`](lifecycle::MealSystem) spins up the actors, enforces the
//! session gate, and shuts everything down.
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! GREENFC_API_KEY=your-key RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod gemini;
pub mod ledger_actor;
pub mod lifecycle;
pub mod model;
pub mod selection_actor;
pub mod session_actor;
