//! Full end-to-end tests driving the system the way the admin UI does:
//! raw string form parameters in, ordered listings out.

use list_actor::ActorClient;
use slideshow_admin::lifecycle::SlideshowSystem;
use slideshow_admin::model::{SlideCreate, SlideUpdate};
use std::collections::HashMap;

fn form(entries: &[(String, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.clone(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_full_admin_reorder_flow() {
    let system = SlideshowSystem::new();

    let first = system
        .slide_client
        .create_slide(SlideCreate {
            name: "Summer sale".to_string(),
            position: None,
        })
        .await
        .expect("Failed to create slide");
    let second = system
        .slide_client
        .create_slide(SlideCreate {
            name: "New arrivals".to_string(),
            position: None,
        })
        .await
        .expect("Failed to create slide");

    // The form swaps the two slides and sneaks in a key that names no
    // slide plus a value that is not a number. Neither derails the rest.
    let params = form(&[
        (first.to_string(), "2"),
        (second.to_string(), "1"),
        ("element".to_string(), "3"),
        (first.to_string() + "_typo", "oops"),
    ]);
    system
        .slide_client
        .update_positions(&params)
        .await
        .expect("Reorder must not fail on messy input");

    let one = system
        .slide_client
        .get(first.clone())
        .await
        .unwrap()
        .expect("Slide not found");
    let two = system
        .slide_client
        .get(second.clone())
        .await
        .unwrap()
        .expect("Slide not found");
    assert_eq!(one.position, 2);
    assert_eq!(two.position, 1);

    // Ordered read matches: [second, first], densely numbered.
    let listed = system.slide_client.list().await.unwrap();
    let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["New arrivals", "Summer sale"]);
    let positions: Vec<u32> = listed.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![1, 2]);

    // No slide materialized for the bogus keys.
    assert_eq!(listed.len(), 2);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_destroy_guard_end_to_end() {
    let system = SlideshowSystem::new();

    let guarded = system
        .slide_client
        .create_slide(SlideCreate {
            name: "undestroyable".to_string(),
            position: None,
        })
        .await
        .unwrap();
    let plain = system
        .slide_client
        .create_slide(SlideCreate {
            name: "plain".to_string(),
            position: None,
        })
        .await
        .unwrap();

    let refused = system.slide_client.delete(guarded.clone()).await;
    let err = refused.expect_err("Guarded slide must refuse deletion");
    let message = err.to_string();
    assert!(message.contains("can't destroy"), "got: {message}");

    // Refusal left the collection untouched.
    let still_there = system.slide_client.get(guarded.clone()).await.unwrap();
    assert!(still_there.is_some());

    // Any other slide deletes fine and the rest is renumbered.
    system.slide_client.delete(plain.clone()).await.unwrap();
    assert!(system.slide_client.get(plain).await.unwrap().is_none());
    let listed = system.slide_client.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].position, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rename_validation_end_to_end() {
    let system = SlideshowSystem::new();

    let id = system
        .slide_client
        .create_slide(SlideCreate {
            name: "Summer sale".to_string(),
            position: None,
        })
        .await
        .unwrap();

    let renamed = system
        .slide_client
        .update_slide(
            id.clone(),
            SlideUpdate {
                name: Some("Winter sale".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Winter sale");

    let rejected = system
        .slide_client
        .update_slide(
            id.clone(),
            SlideUpdate {
                name: Some("  ".to_string()),
            },
        )
        .await;
    assert!(rejected.is_err());

    // The stored name is unchanged after the rejected update.
    let current = system.slide_client.get(id).await.unwrap().unwrap();
    assert_eq!(current.name, "Winter sale");

    system.shutdown().await.unwrap();
}

/// Concurrent submissions interleave at message granularity inside the
/// actor, so whatever order they land in, the collection must come out
/// densely numbered.
#[tokio::test]
async fn test_concurrent_reorders_stay_dense() {
    let system = SlideshowSystem::new();

    let mut ids = Vec::new();
    for name in ["a", "b", "c", "d", "e"] {
        let id = system
            .slide_client
            .create_slide(SlideCreate {
                name: name.to_string(),
                position: None,
            })
            .await
            .unwrap();
        ids.push(id);
    }

    let mut handles = Vec::new();
    for round in 0..10u32 {
        let client = system.slide_client.clone();
        let ids = ids.clone();
        handles.push(tokio::spawn(async move {
            // Each task rotates a different slide to the front.
            let slot = (round as usize) % ids.len();
            let params: HashMap<String, String> = HashMap::from([
                (ids[slot].to_string(), "1".to_string()),
                (ids[(slot + 1) % ids.len()].to_string(), "3".to_string()),
            ]);
            client.update_positions(&params).await
        }));
    }

    for handle in handles {
        handle.await.unwrap().expect("Reorder failed");
    }

    let listed = system.slide_client.list().await.unwrap();
    let positions: Vec<u32> = listed.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![1, 2, 3, 4, 5]);

    system.shutdown().await.unwrap();
}
