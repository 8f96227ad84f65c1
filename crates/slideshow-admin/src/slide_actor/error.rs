//! Error types for the Slide actor.

use thiserror::Error;

/// Errors that can occur during slide operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SlideError {
    /// The requested slide was not found.
    #[error("Slide not found: {0}")]
    NotFound(String),

    /// The slide name is missing or blank.
    #[error("Slide name can't be blank")]
    BlankName,

    /// The destroy guard vetoed a deletion.
    ///
    /// Carries every message the guard produced; the rendered error joins
    /// them so callers that only see the string still get all of them.
    #[error("{}", .reasons.join(" "))]
    DestroyBlocked { reasons: Vec<String> },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SlideError {
    fn from(msg: String) -> Self {
        SlideError::ActorCommunicationError(msg)
    }
}
