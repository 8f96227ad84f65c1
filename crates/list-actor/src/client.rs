//! # Generic Client
//!
//! The sender half of an actor pair. Every method is one request/response
//! round trip over the actor's channel.

use crate::entity::OrderedEntity;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a [`CollectionActor`](crate::CollectionActor).
///
/// Holds only the channel sender, so it is cheap to clone and share across
/// tasks. All methods are async and resolve to
/// `Result<_, FrameworkError>`; dropping every clone of a client closes the
/// actor's channel and lets it shut down.
#[derive(Clone)]
pub struct CollectionClient<T: OrderedEntity> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

impl<T: OrderedEntity> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// All entities in the collection, sorted by position.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Applies a batch of candidate-id → desired-position pairs.
    ///
    /// Keys that do not resolve to a stored entity are skipped by the
    /// actor; the call itself only fails on channel errors.
    pub async fn reorder(&self, targets: HashMap<String, u32>) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Reorder {
                targets,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
