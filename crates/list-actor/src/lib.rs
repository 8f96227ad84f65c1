//! # List Actor
//!
//! Building blocks for type-safe actors that manage *ordered collections*
//! of entities. The crate applies a Resource-Oriented layout (uniform
//! create / read / update / delete / list operations over well-defined
//! resources) on top of the Actor Model (isolated state, message-passing
//! concurrency, sequential processing inside each actor), and adds the one
//! capability generic CRUD frameworks lack: an integer *position* on every
//! entity that always forms a dense `1..=N` total order.
//!
//! ## Why an actor for ordering?
//!
//! Reordering is a whole-collection mutation: moving one entry renumbers
//! its neighbors. Guarding that with locks invites transiently duplicated
//! or missing positions being observed by readers. Here each collection is
//! owned by one [`CollectionActor`] that processes messages sequentially,
//! so every mutation - including a batch reorder - completes before the
//! next read is served. The message loop *is* the transaction scope.
//!
//! ## Architecture Overview
//!
//! Three layers, each its own module:
//!
//! 1. **Entity Layer** ([`OrderedEntity`], [`position`]) - your domain
//!    model, its lifecycle hooks, and the ordering rules.
//! 2. **Runtime Layer** ([`CollectionActor`]) - message processing and
//!    invariant maintenance.
//! 3. **Interface Layer** ([`CollectionClient`], [`ActorClient`]) -
//!    type-safe, cloneable async handles.
//!
//! Business logic is written once in the entity trait; the framework
//! handles the channels, the errors and the positions.
//!
//! ## Core Abstractions
//!
//! ```rust
//! use list_actor::position::Positioned;
//! use list_actor::{CollectionActor, OrderedEntity};
//! use async_trait::async_trait;
//!
//! // 1. Define the Entity
//! #[derive(Clone, Debug)]
//! struct Bookmark {
//!     id: u32,
//!     url: String,
//!     position: u32,
//! }
//!
//! #[derive(Debug)] struct BookmarkCreate { url: String }
//! #[derive(Debug)] struct BookmarkUpdate { url: Option<String> }
//! #[derive(Debug, thiserror::Error)]
//! #[error("bookmark error")]
//! struct BookmarkError;
//!
//! impl Positioned for Bookmark {
//!     fn position(&self) -> u32 { self.position }
//!     fn set_position(&mut self, position: u32) { self.position = position; }
//! }
//!
//! #[async_trait]
//! impl OrderedEntity for Bookmark {
//!     type Id = u32;
//!     type Create = BookmarkCreate;
//!     type Update = BookmarkUpdate;
//!     type Context = ();
//!     type Error = BookmarkError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: BookmarkCreate) -> Result<Self, BookmarkError> {
//!         Ok(Self { id, url: params.url, position: 0 })
//!     }
//!
//!     async fn on_update(&mut self, update: BookmarkUpdate, _ctx: &()) -> Result<(), BookmarkError> {
//!         if let Some(url) = update.url { self.url = url; }
//!         Ok(())
//!     }
//! }
//!
//! // 2. Use the Actor
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = CollectionActor::<Bookmark>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(BookmarkCreate { url: "https://example.com".into() }).await.unwrap();
//!     let first = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(first.position, 1);
//! }
//! ```
//!
//! ## The Reorder Operation
//!
//! [`CollectionClient::reorder`] takes a map of *raw candidate-id strings*
//! to desired 1-based positions - exactly the shape an admin form submits.
//! Keys that fail to parse as an id, or parse but name no stored entity,
//! are silently skipped; resolvable entries are applied and the collection
//! is renumbered densely. The operation never fails on malformed input.
//!
//! ## Destroy Guards
//!
//! [`OrderedEntity::before_delete`] runs inside the actor before any state
//! is touched. Returning an error vetoes the removal: the caller gets the
//! entity's error (wrapped in [`FrameworkError::EntityError`]) and the
//! collection is left exactly as it was.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) with a
//! fluent expectation API plus channel-level helpers for asserting the raw
//! requests a wrapper produces. See that module for the strategy guide.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod position;
pub mod tracing;

// Re-export core types for convenience
pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::ActorClient;
pub use entity::OrderedEntity;
pub use error::FrameworkError;
pub use message::{CollectionRequest, Response};
