//! # Observability & Tracing
//!
//! Structured logging for the whole actor system, via the `tracing` crate.
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); actors tag their lines with `entity_type` instead.
//! Verbosity is controlled through `RUST_LOG`:
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full commands and events
//! RUST_LOG=debug cargo run
//! ```
//!
//! What gets traced:
//!
//! - **Actor lifecycle**: startup and shutdown per entity type
//! - **Commands**: every command and its resulting event at debug level
//! - **Flows**: spin ticks, committed picks, gate transitions
//! - **Errors**: failed external calls with their reasons
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
