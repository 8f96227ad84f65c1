//! Entity trait implementation for the Slide domain type.
//!
//! This module contains the [`OrderedEntity`] implementation that enables
//! [`Slide`] to be managed by the generic
//! [`CollectionActor`](list_actor::CollectionActor), plus the domain rules
//! that run inside its hooks: name validation and the destroy guard.

use super::error::SlideError;
use crate::model::{Slide, SlideCreate, SlideId, SlideUpdate};
use async_trait::async_trait;
use list_actor::position::{Positioned, UNPOSITIONED};
use list_actor::OrderedEntity;

/// Slides carrying this name refuse deletion.
pub const UNDESTROYABLE_NAME: &str = "undestroyable";

fn validate_name(name: &str) -> Result<(), SlideError> {
    if name.trim().is_empty() {
        return Err(SlideError::BlankName);
    }
    Ok(())
}

impl Positioned for Slide {
    fn position(&self) -> u32 {
        self.position
    }

    fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}

#[async_trait]
impl OrderedEntity for Slide {
    type Id = SlideId;
    type Create = SlideCreate;
    type Update = SlideUpdate;
    type Context = ();
    type Error = SlideError;

    fn id(&self) -> &SlideId {
        &self.id
    }

    /// Creates a new Slide from creation parameters.
    ///
    /// The name must not be blank. A missing position means "append at
    /// the bottom"; the actor resolves the actual slot.
    fn from_create_params(id: SlideId, params: SlideCreate) -> Result<Self, SlideError> {
        validate_name(&params.name)?;
        Ok(Self::new(
            id,
            params.name,
            params.position.unwrap_or(UNPOSITIONED),
        ))
    }

    /// Handles updates to the Slide entity.
    ///
    /// # Fields Updated
    /// - `name`: display name, same blank check as creation
    async fn on_update(&mut self, update: SlideUpdate, _ctx: &()) -> Result<(), SlideError> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        Ok(())
    }

    /// Destroy guard: slides named [`UNDESTROYABLE_NAME`] refuse deletion.
    ///
    /// The veto carries human-readable messages and the actor aborts the
    /// removal before touching any state.
    async fn before_delete(&self, _ctx: &()) -> Result<(), SlideError> {
        if self.name == UNDESTROYABLE_NAME {
            return Err(SlideError::DestroyBlocked {
                reasons: vec![
                    "You can't destroy undestroyable things!".to_string(),
                    "Terrible things might happen.".to_string(),
                ],
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected_at_creation() {
        let params = SlideCreate {
            name: "  ".to_string(),
            position: None,
        };
        let result = Slide::from_create_params(SlideId(1), params);
        assert_eq!(result, Err(SlideError::BlankName));
    }

    #[tokio::test]
    async fn blank_names_are_rejected_at_update() {
        let mut slide = Slide::new(SlideId(1), "summer sale", 1);
        let result = slide
            .on_update(
                SlideUpdate {
                    name: Some(String::new()),
                },
                &(),
            )
            .await;
        assert_eq!(result, Err(SlideError::BlankName));
        assert_eq!(slide.name, "summer sale");
    }

    #[tokio::test]
    async fn guard_vetoes_the_reserved_name() {
        let slide = Slide::new(SlideId(1), UNDESTROYABLE_NAME, 1);
        let result = slide.before_delete(&()).await;
        match result {
            Err(SlideError::DestroyBlocked { reasons }) => {
                assert!(!reasons.is_empty());
                assert!(reasons[0].contains("can't destroy"));
            }
            other => panic!("Expected DestroyBlocked, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn guard_permits_other_names() {
        let slide = Slide::new(SlideId(1), "summer sale", 1);
        assert!(slide.before_delete(&()).await.is_ok());
    }
}
