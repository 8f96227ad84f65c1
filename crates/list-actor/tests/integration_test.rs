use async_trait::async_trait;
use list_actor::position::{Positioned, UNPOSITIONED};
use list_actor::{CollectionActor, OrderedEntity};
use std::collections::HashMap;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Track {
    id: u32,
    title: String,
    locked: bool,
    position: u32,
}

#[derive(Debug)]
struct TrackCreate {
    title: String,
    locked: bool,
    position: Option<u32>,
}

#[derive(Debug)]
struct TrackUpdate {
    title: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum TrackError {
    #[error("track is locked and can't be removed")]
    Locked,
}

impl Positioned for Track {
    fn position(&self) -> u32 {
        self.position
    }
    fn set_position(&mut self, position: u32) {
        self.position = position;
    }
}

#[async_trait]
impl OrderedEntity for Track {
    type Id = u32;
    type Create = TrackCreate;
    type Update = TrackUpdate;
    type Context = ();
    type Error = TrackError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: TrackCreate) -> Result<Self, TrackError> {
        Ok(Self {
            id,
            title: params.title,
            locked: params.locked,
            position: params.position.unwrap_or(UNPOSITIONED),
        })
    }

    async fn on_update(&mut self, update: TrackUpdate, _ctx: &()) -> Result<(), TrackError> {
        if let Some(title) = update.title {
            self.title = title;
        }
        Ok(())
    }

    async fn before_delete(&self, _ctx: &()) -> Result<(), TrackError> {
        if self.locked {
            return Err(TrackError::Locked);
        }
        Ok(())
    }
}

fn track(title: &str, locked: bool) -> TrackCreate {
    TrackCreate {
        title: title.to_string(),
        locked,
        position: None,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = CollectionActor::<Track>::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create: ids are sequential, positions append in creation order
    let first = client.create(track("intro", false)).await.unwrap();
    let second = client.create(track("verse", false)).await.unwrap();
    let third = client.create(track("outro", true)).await.unwrap();
    assert_eq!(first, 1);
    assert_eq!(client.get(second).await.unwrap().unwrap().position, 2);

    // 2. Reorder: swap first and third, with a bogus key in the batch
    let targets: HashMap<String, u32> = [
        ("1".to_string(), 3),
        ("3".to_string(), 1),
        ("not-a-track".to_string(), 2),
    ]
    .into();
    client.reorder(targets).await.unwrap();

    let listed = client.list().await.unwrap();
    let titles: Vec<&str> = listed.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["outro", "verse", "intro"]);
    let positions: Vec<u32> = listed.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);

    // 3. Update
    let updated = client
        .update(
            second,
            TrackUpdate {
                title: Some("chorus".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "chorus");

    // 4. Delete: the locked track refuses, the rest goes through
    let refused = client.delete(third).await;
    assert!(refused.is_err());
    assert!(client.get(third).await.unwrap().is_some());

    client.delete(first).await.unwrap();
    assert!(client.get(first).await.unwrap().is_none());

    // 5. The remainder is renumbered densely
    let remaining = client.list().await.unwrap();
    let positions: Vec<u32> = remaining.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![1, 2]);
}

#[tokio::test]
async fn test_create_at_explicit_position() {
    let (actor, client) = CollectionActor::<Track>::new(10);
    tokio::spawn(actor.run(()));

    client.create(track("a", false)).await.unwrap();
    client.create(track("b", false)).await.unwrap();
    client
        .create(TrackCreate {
            title: "c".to_string(),
            locked: false,
            position: Some(1),
        })
        .await
        .unwrap();

    let listed = client.list().await.unwrap();
    let titles: Vec<&str> = listed.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "a", "b"]);
    let positions: Vec<u32> = listed.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_reorder_stays_dense_across_calls() {
    let (actor, client) = CollectionActor::<Track>::new(10);
    tokio::spawn(actor.run(()));

    for title in ["a", "b", "c", "d", "e"] {
        client.create(track(title, false)).await.unwrap();
    }

    let batches: Vec<HashMap<String, u32>> = vec![
        [("5".to_string(), 1)].into(),
        [("1".to_string(), 5), ("2".to_string(), 4)].into(),
        [("3".to_string(), 3)].into(),
        HashMap::new(),
    ];

    for targets in batches {
        client.reorder(targets).await.unwrap();
        let listed = client.list().await.unwrap();
        let positions: Vec<u32> = listed.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    }
}
