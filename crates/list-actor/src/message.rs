//! # Collection Messages
//!
//! The message types exchanged between a [`CollectionClient`](crate::CollectionClient)
//! and its [`CollectionActor`](crate::CollectionActor).
//!
//! # Resource-Oriented Design
//! Each actor manages one kind of ordered resource. Instead of ad-hoc
//! messages per operation, the protocol standardizes on the lifecycle
//! operations every ordered collection needs:
//!
//! - **Create**: initialize a resource from [`OrderedEntity::Create`] and
//!   place it in the order.
//! - **Get (Read)**: fetch one resource by id.
//! - **Update**: mutate a resource through [`OrderedEntity::Update`].
//! - **Delete**: remove a resource, subject to its destroy guard.
//! - **List**: read the whole collection in position order.
//! - **Reorder**: apply a batch of candidate-id → desired-position pairs
//!   to the collection.
//!
//! `Reorder` is deliberately collection-scoped, not entity-scoped: its keys
//! are raw strings straight from the caller's request layer. Keys that do
//! not resolve to a stored entity are skipped by the actor, never errors -
//! that filtering is part of the reorder contract.

use crate::entity::OrderedEntity;
use crate::error::FrameworkError;
use std::collections::HashMap;
use tokio::sync::oneshot;

/// One-shot response channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal request type sent to a collection actor.
///
/// Generic over `T: OrderedEntity`, so each operation carries exactly the
/// payload types that entity declared. You cannot send a slide payload to
/// a different collection's actor.
#[derive(Debug)]
pub enum CollectionRequest<T: OrderedEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Reorder {
        /// Candidate-id string → desired 1-based position.
        targets: HashMap<String, u32>,
        respond_to: Response<()>,
    },
}
