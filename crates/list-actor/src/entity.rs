//! # OrderedEntity Trait
//!
//! The `OrderedEntity` trait is the contract an entity type must satisfy to
//! be managed by the generic [`CollectionActor`](crate::CollectionActor).
//! It names the entity's identifier, DTO, context and error types, and
//! provides the lifecycle hooks (`on_create`, `on_update`, `before_delete`)
//! through which domain rules run inside the actor loop.
//!
//! # Architecture Note
//! Writing the collection-management logic once against this trait means
//! every resource type gets the same create / read / update / delete /
//! list / reorder surface without repeating any channel plumbing. The
//! associated types keep it safe: you cannot send one entity's payload to
//! another entity's actor, the compiler rejects it.
//!
//! Entities are also [`Positioned`]: the actor owns the ordering invariant
//! (positions are always a dense `1..=N`) and reads/writes positions
//! exclusively through that trait.
//!
//! # Provided Methods (Hooks)
//! `on_create` and `before_delete` have default no-op implementations.
//! Implement `before_delete` to veto a deletion: returning an error aborts
//! the removal before any state is touched, and the caller receives the
//! error instead of a deleted record.

use crate::position::Positioned;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Contract for entities managed by a [`CollectionActor`](crate::CollectionActor).
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may perform asynchronous work
/// (e.g. consulting another actor through a client held in `Context`).
/// `Context` is injected into every hook at `run()` time, not at
/// construction time, which keeps actor wiring free of circular
/// dependencies. Use `()` when an entity needs nothing.
#[async_trait]
pub trait OrderedEntity: Positioned + Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    ///
    /// `From<u32>` feeds the actor's sequential id generation; `FromStr`
    /// is the *fallible* resolution path used by batch reorders, where
    /// arbitrary strings may or may not name an entity. Resolution never
    /// panics: a string that fails to parse simply does not resolve.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32> + FromStr;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the hooks.
    type Context: Send + Sync;

    /// The error type for this entity's domain rules.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The entity's identifier, used to key the store and to resolve
    /// reorder batches.
    fn id(&self) -> &Self::Id;

    /// Constructs the full entity from the generated id and the payload.
    /// Called synchronously before `on_create`; validation failures here
    /// abort the creation.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed, before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Destroy guard: called before the entity is removed.
    ///
    /// Returning an error vetoes the deletion; the entity stays in the
    /// store untouched and the error is reported to the caller.
    async fn before_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
