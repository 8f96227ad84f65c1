//! # Slide Actor
//!
//! The actor managing the storefront's slideshow collection.
//!
//! ## Overview
//!
//! Slides are the one ordered resource in this system: admins create them,
//! rename them, drag them into a new order and occasionally delete them.
//! All of that runs through a single [`CollectionActor`] so the `position`
//! column is always a dense `1..=N`, no matter how the admin form batches
//! its submissions.
//!
//! ## Structure
//!
//! - [`entity`] - [`OrderedEntity`](list_actor::OrderedEntity)
//!   implementation for [`Slide`], including the destroy guard
//! - [`error`] - [`SlideError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use slideshow_admin::clients::SlideClient;
//! use slideshow_admin::model::SlideCreate;
//! use slideshow_admin::slide_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = slide_actor::new();
//!     let client = SlideClient::new(generic_client);
//!
//!     // Start the actor (no dependencies, so context is ())
//!     tokio::spawn(actor.run(()));
//!
//!     let params = SlideCreate {
//!         name: "Summer sale".to_string(),
//!         position: None,
//!     };
//!     let id = client.create_slide(params).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::UNDESTROYABLE_NAME;
pub use error::*;

use crate::model::Slide;
use list_actor::{CollectionActor, CollectionClient};

/// Creates a new Slide actor and its client.
pub fn new() -> (CollectionActor<Slide>, CollectionClient<Slide>) {
    CollectionActor::new(32)
}
