//! # Mock Framework & Testing Guide
//!
//! The [`MockClient`] type speaks the same channel protocol as a real
//! [`CollectionActor`](crate::CollectionActor) but operates entirely
//! in-memory from a queue of expectations. It exists for unit-testing the
//! logic *around* a client (a domain wrapper like a `SlideClient`) without
//! spawning any actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (involves tokio spawn) |
//! | **Determinism** | 100% deterministic | Subject to scheduler |
//! | **State** | None (expectations only) | Real ordered store |
//! | **Use case** | Client wrapper logic | Actor logic, full flows |
//! | **Error injection** | Easy (`return_err`) | Needs specific state |
//!
//! ## Testing Strategies
//!
//! - **Client logic**: `MockClient` expectations, no actors. See the
//!   `#[cfg(test)]` module of the domain client.
//! - **Single actor**: spawn a real actor, drive it through its client.
//!   See this crate's `tests/integration_test.rs`.
//! - **Full system**: spawn everything via the lifecycle orchestrator.
//!   See the domain crate's `tests/integration_test.rs`.
//!
//! ## Channel-Level Helpers
//!
//! When a test wants to *inspect the request itself* (e.g. assert exactly
//! which reorder targets a wrapper produced after filtering its input),
//! use [`create_mock_client`] plus the `expect_*` helpers: they hand back
//! the decoded request payload and its responder.

use crate::client::CollectionClient;
use crate::entity::OrderedEntity;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request together with its canned response.
#[allow(dead_code)] // Update expectations kept for symmetry with the protocol
enum Expectation<T: OrderedEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Reorder {
        response: Result<(), FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Slide>::new();
/// mock.expect_create().return_ok(SlideId(1));
/// mock.expect_list().return_ok(vec![slide]);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were consumed
/// ```
pub struct MockClient<T: OrderedEntity> {
    client: CollectionClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: OrderedEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: OrderedEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answers each request from the expectation queue.
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::Get { id: _, respond_to },
                        Some(Expectation::Get { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Create {
                            params: _,
                            respond_to,
                        },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Update {
                            id: _,
                            update: _,
                            respond_to,
                        },
                        Some(Expectation::Update { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Delete { id: _, respond_to },
                        Some(Expectation::Delete { id: _, response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Reorder {
                            targets: _,
                            respond_to,
                        },
                        Some(Expectation::Reorder { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `reorder` operation.
    pub fn expect_reorder(&mut self) -> ReorderExpectationBuilder<T> {
        ReorderExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: OrderedEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: OrderedEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: OrderedEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: OrderedEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create {
                response: Err(error),
            });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: OrderedEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: OrderedEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response: Ok(()),
            });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Delete {
                id: self.id,
                response: Err(error),
            });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: OrderedEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: OrderedEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                response: Ok(items),
            });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List {
                response: Err(error),
            });
    }
}

/// Builder for `reorder` expectations.
pub struct ReorderExpectationBuilder<T: OrderedEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: OrderedEntity> ReorderExpectationBuilder<T> {
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Reorder { response: Ok(()) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Reorder {
                response: Err(error),
            });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting raw requests.
///
/// # Testing Strategy
/// The fluent [`MockClient`] answers requests without exposing them. When a
/// test needs to assert *what* was sent - e.g. which targets survived a
/// wrapper's input filtering - take the receiver side and decode the
/// request with the `expect_*` helpers below.
pub fn create_mock_client<T: OrderedEntity>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Verifies that the next message is a Create request.
pub async fn expect_create<T: OrderedEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Verifies that the next message is a Get request.
pub async fn expect_get<T: OrderedEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Verifies that the next message is a Reorder request.
pub async fn expect_reorder<T: OrderedEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    HashMap<String, u32>,
    tokio::sync::oneshot::Sender<Result<(), FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Reorder {
            targets,
            respond_to,
        }) => Some((targets, respond_to)),
        _ => None,
    }
}

/// Verifies that the next message is a Delete request.
pub async fn expect_delete<T: OrderedEntity>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<(), FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::OrderedEntity;
    use crate::position::Positioned;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Pin {
        id: u32,
        label: String,
        position: u32,
    }

    #[derive(Debug)]
    struct PinCreate {
        label: String,
    }

    #[derive(Debug)]
    struct PinUpdate;

    #[derive(Debug, thiserror::Error)]
    #[error("Pin error")]
    struct PinError;

    impl Positioned for Pin {
        fn position(&self) -> u32 {
            self.position
        }
        fn set_position(&mut self, position: u32) {
            self.position = position;
        }
    }

    #[async_trait]
    impl OrderedEntity for Pin {
        type Id = u32;
        type Create = PinCreate;
        type Update = PinUpdate;
        type Context = ();
        type Error = PinError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: PinCreate) -> Result<Self, PinError> {
            Ok(Self {
                id,
                label: params.label,
                position: 0,
            })
        }

        async fn on_update(&mut self, _update: PinUpdate, _ctx: &()) -> Result<(), PinError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_channel_level_mock() {
        let (client, mut receiver) = create_mock_client::<Pin>(10);

        let create_task = tokio::spawn(async move {
            let pin = PinCreate {
                label: "first".to_string(),
            };
            client.create(pin).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "first");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(id) if id == 1));
    }

    #[tokio::test]
    async fn test_reorder_request_exposes_targets() {
        let (client, mut receiver) = create_mock_client::<Pin>(10);

        let reorder_task = tokio::spawn(async move {
            let targets: HashMap<String, u32> = [("1".to_string(), 2)].into();
            client.reorder(targets).await
        });

        let (targets, responder) = expect_reorder(&mut receiver)
            .await
            .expect("Expected Reorder request");
        assert_eq!(targets.get("1"), Some(&2));
        responder.send(Ok(())).unwrap();

        assert!(reorder_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Pin>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(Pin {
            id: 1,
            label: "first".to_string(),
            position: 1,
        }));
        mock.expect_list().return_ok(vec![Pin {
            id: 1,
            label: "first".to_string(),
            position: 1,
        }]);

        let client = mock.client();

        let id = client
            .create(PinCreate {
                label: "first".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().label, "first");

        let listed = client.list().await.unwrap();
        assert_eq!(listed.len(), 1);

        mock.verify();
    }
}
