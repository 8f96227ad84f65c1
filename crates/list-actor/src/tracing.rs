//! # Observability & Tracing
//!
//! Structured logging setup for the whole actor system.
//!
//! Every actor operation (Create, Get, Update, Delete, List, Reorder) logs
//! with structured fields - `entity_type`, ids, collection size - and the
//! client wrappers add `#[instrument]` spans, so a request can be followed
//! from the client call into the actor loop.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`);
//! the `entity_type` field carries that information instead.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per operation
//! RUST_LOG=debug cargo run     # full payloads at function entry
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
