use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Type-safe identifier for slides.
///
/// `Display` and `FromStr` round-trip through the `slide_<n>` form that
/// the admin UI submits; parsing is fallible and arbitrary strings simply
/// fail to resolve, which is what the reorder batch filtering relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideId(pub u32);

impl From<u32> for SlideId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slide_{}", self.0)
    }
}

/// Error returned when a string does not name a slide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a slide id: {0}")]
pub struct ParseSlideIdError(String);

impl FromStr for SlideId {
    type Err = ParseSlideIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("slide_")
            .and_then(|n| n.parse::<u32>().ok())
            .map(Self)
            .ok_or_else(|| ParseSlideIdError(s.to_string()))
    }
}

/// A carousel slide shown on the storefront, ordered by `position`.
///
/// # Actor Framework
/// This struct implements the [`OrderedEntity`](list_actor::OrderedEntity)
/// trait, so a [`CollectionActor`](list_actor::CollectionActor) manages its
/// lifecycle and keeps `position` dense across the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: SlideId,
    pub name: String,
    pub position: u32,
}

impl Slide {
    /// Creates a new Slide instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor system)
    /// * `name` - Display name shown in the admin list
    /// * `position` - 1-based slot, or the unpositioned sentinel for
    ///   "append at the bottom"
    pub fn new(id: SlideId, name: impl Into<String>, position: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position,
        }
    }
}

/// Payload for creating a new slide.
#[derive(Debug, Clone)]
pub struct SlideCreate {
    pub name: String,
    /// Desired 1-based slot; `None` appends at the bottom.
    pub position: Option<u32>,
}

/// Payload for updating an existing slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideUpdate {
    pub name: Option<String>,
}
