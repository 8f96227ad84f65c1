//! Demo entry point: drives the slideshow system through the flows the
//! admin UI performs - create, reorder with a messy form submission,
//! attempt a guarded delete - and logs each step.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per operation
//! RUST_LOG=debug cargo run     # full payloads
//! ```

use list_actor::tracing::setup_tracing;
use list_actor::ActorClient;
use slideshow_admin::lifecycle::SlideshowSystem;
use slideshow_admin::model::SlideCreate;
use std::collections::HashMap;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting slideshow admin system");

    let system = SlideshowSystem::new();

    // Seed a few slides; the last one demonstrates the destroy guard.
    let mut ids = Vec::new();
    for name in ["Summer sale", "New arrivals", "undestroyable"] {
        let params = SlideCreate {
            name: name.to_string(),
            position: None,
        };
        let id = system
            .slide_client
            .create_slide(params)
            .await
            .map_err(|e| e.to_string())?;
        info!(slide_id = %id, name, "Slide created");
        ids.push(id);
    }

    // Reorder the way the admin form submits it: raw strings, including a
    // key that names no slide. The bogus entry is skipped, the rest lands.
    let span = tracing::info_span!("reorder");
    async {
        let mut params: HashMap<String, String> = HashMap::new();
        params.insert(ids[0].to_string(), "3".to_string());
        params.insert(ids[2].to_string(), "1".to_string());
        params.insert("banner_7".to_string(), "2".to_string());

        info!("Submitting reorder form");
        system
            .slide_client
            .update_positions(&params)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let slides = system
        .slide_client
        .list()
        .await
        .map_err(|e| e.to_string())?;
    for slide in &slides {
        info!(position = slide.position, name = %slide.name, "Slide");
    }

    // The guard refuses this one; any other slide deletes fine.
    match system.slide_client.delete(ids[2].clone()).await {
        Ok(()) => info!("Slide deleted"),
        Err(e) => error!(error = %e, "Delete refused"),
    }
    system
        .slide_client
        .delete(ids[1].clone())
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
