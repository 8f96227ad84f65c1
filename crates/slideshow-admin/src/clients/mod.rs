//! Type-safe wrappers around [`CollectionClient`](list_actor::CollectionClient).

pub mod slide_client;

pub use slide_client::*;
