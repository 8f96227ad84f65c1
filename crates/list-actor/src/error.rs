//! # Framework Errors
//!
//! Common error types shared by every actor and client. Entity-specific
//! failures (validation, vetoed deletions) travel boxed inside
//! [`FrameworkError::EntityError`] so the framework never needs to know
//! the domain's error enum.

/// Errors that can occur within the collection-actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's channel is closed; it is no longer accepting requests.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the response channel without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// No entity with the given id exists in the collection.
    #[error("Entity not found: {0}")]
    NotFound(String),
    /// A domain rule rejected the operation.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
