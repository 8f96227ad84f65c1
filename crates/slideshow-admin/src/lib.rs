//! # Slideshow Admin
//!
//! Admin-facing management of a storefront's carousel slides, built on the
//! [`list_actor`] collection-actor framework.
//!
//! ## Core Components
//!
//! - **[model]**: The [`Slide`](model::Slide) entity and its DTOs.
//! - **[slide_actor]**: The [`OrderedEntity`](list_actor::OrderedEntity)
//!   implementation - name validation, the destroy guard - and the actor
//!   factory.
//! - **[clients]**: The typed [`SlideClient`](clients::SlideClient),
//!   including the `update_positions` entry point that accepts a raw
//!   id-string → position-string map from the admin reorder form.
//! - **[lifecycle]**: The [`SlideshowSystem`](lifecycle::SlideshowSystem)
//!   orchestrator.
//!
//! ## Ordering Contract
//!
//! Slide positions are always a dense `1..=N`. A reorder submission may
//! contain keys that name no slide and values that are not numbers; both
//! are silently dropped and the resolvable rest is applied. Slides named
//! `"undestroyable"` refuse deletion with human-readable messages.

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod slide_actor;
