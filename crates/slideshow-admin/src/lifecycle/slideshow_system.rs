use crate::clients::SlideClient;
use tracing::{error, info};

/// The runtime orchestrator for the slideshow admin system.
///
/// `SlideshowSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the slide actor
/// - **Client Wiring**: handing out the typed [`SlideClient`]
///
/// # Example
///
/// ```ignore
/// let system = SlideshowSystem::new();
///
/// let id = system.slide_client.create_slide(slide_data).await?;
/// system.slide_client.update_positions(&form_params).await?;
///
/// system.shutdown().await?;
/// ```
pub struct SlideshowSystem {
    /// Client for interacting with the Slide actor
    pub slide_client: SlideClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl SlideshowSystem {
    /// Creates and initializes a new `SlideshowSystem` with the slide
    /// actor running and ready to accept requests.
    pub fn new() -> Self {
        let (slide_actor, generic_client) = crate::slide_actor::new();
        let slide_client = SlideClient::new(generic_client);

        // The slide actor has no dependencies (Context = ())
        let slide_handle = tokio::spawn(slide_actor.run(()));

        Self {
            slide_client,
            handles: vec![slide_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes the actor channels; each actor detects
    /// the closed channel, drains its remaining messages and exits its
    /// event loop. This method then waits for every actor task to finish.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.slide_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
