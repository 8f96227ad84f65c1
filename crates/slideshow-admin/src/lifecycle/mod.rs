//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and shutting down the actor system.
//!
//! Individual actors are simple; the orchestration layer is where they are
//! created, given their dependencies and spawned in the right order. This
//! system currently runs a single slide actor, so [`SlideshowSystem`]
//! mostly demonstrates the pattern: create the actor pair, spawn the run
//! loop with its context, keep the join handles for shutdown.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - remaining messages drain, final state logged
//! 4. **Await completion** - join handles are awaited
//!
//! No messages are lost: everything already queued is processed before the
//! actor exits.
//!
//! ## Observability
//!
//! Call [`list_actor::tracing::setup_tracing`] once at startup; every actor
//! operation then logs with structured fields, filtered via `RUST_LOG`.

pub mod slideshow_system;

pub use slideshow_system::*;
