//! # Slide Client
//!
//! High-level API for the Slide actor. Wraps a `CollectionClient<Slide>`
//! and exposes domain-specific methods, including the admin-facing
//! `update_positions` entry point that accepts the raw string map a
//! reorder form submits.

use crate::model::{Slide, SlideCreate, SlideId, SlideUpdate};
use crate::slide_actor::SlideError;
use list_actor::{ActorClient, CollectionClient, FrameworkError};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Client for interacting with the Slide actor.
#[derive(Clone)]
pub struct SlideClient {
    inner: CollectionClient<Slide>,
}

impl SlideClient {
    pub fn new(inner: CollectionClient<Slide>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Slide> for SlideClient {
    type Error = SlideError;

    fn inner(&self) -> &CollectionClient<Slide> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SlideError::ActorCommunicationError(e.to_string())
    }
}

impl SlideClient {
    /// Create a slide; without an explicit position it lands at the bottom.
    #[instrument(skip(self))]
    pub async fn create_slide(&self, params: SlideCreate) -> Result<SlideId, SlideError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Rename a slide. Returns the updated state.
    #[instrument(skip(self))]
    pub async fn update_slide(
        &self,
        id: SlideId,
        update: SlideUpdate,
    ) -> Result<Slide, SlideError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map_err(Self::map_error)
    }

    /// Admin entry point for the drag-and-drop reorder form.
    ///
    /// `params` maps raw id strings to raw position strings, exactly as
    /// they arrive from the request layer. Entries whose value is not a
    /// number are dropped here; entries whose key does not resolve to a
    /// stored slide are dropped by the actor. Malformed input is never an
    /// error - the call only fails if the actor is unreachable.
    #[instrument(skip(self, params))]
    pub async fn update_positions(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<(), SlideError> {
        let targets: HashMap<String, u32> = params
            .iter()
            .filter_map(|(id, position)| {
                let position = position.trim().parse::<u32>().ok()?;
                Some((id.clone(), position))
            })
            .collect();
        debug!(
            submitted = params.len(),
            parsed = targets.len(),
            "Reordering slides"
        );
        self.reorder(targets).await
    }
}
