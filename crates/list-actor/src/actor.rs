//! # Generic Collection Actor
//!
//! The `CollectionActor` owns the state of one ordered collection and
//! processes its messages sequentially. It is the "server" half of the
//! actor pair returned by [`CollectionActor::new`].
//!
//! # Concurrency Model
//! Each actor runs in its own Tokio task and handles one message at a time,
//! so the store needs no `Mutex` or `RwLock`: exclusive ownership within
//! the task is the synchronization. This sequential loop is also what makes
//! the ordering invariant observable-safe - a reorder runs to completion
//! before any read is served, so no caller ever sees a duplicated or
//! missing position.
//!
//! # Ordering Invariant
//! After every mutation (create, delete, reorder) the stored positions form
//! a dense `1..=N` sequence. The actor funnels all position writes through
//! [`crate::position`], which owns the placement and renormalization rules.
//!
//! # Operations
//!
//! * **Create** - generate the next id, build the entity via
//!   `from_create_params`, run `on_create`, then place it at its requested
//!   slot (bottom when unspecified) and renormalize.
//! * **Get** - clone out of the store by id.
//! * **Update** - run `on_update` on the stored entity; `NotFound` if
//!   absent.
//! * **Delete** - run the `before_delete` guard; a veto aborts with the
//!   entity's error and leaves the store untouched, otherwise remove and
//!   renormalize the remainder.
//! * **List** - all entities, sorted by position.
//! * **Reorder** - resolve each raw key (parse + lookup, both fallible,
//!   both silent on failure), apply the resolved targets, renormalize.
//!   Never fails for malformed input.

use crate::client::CollectionClient;
use crate::entity::OrderedEntity;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use crate::position;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one ordered collection of entities.
pub struct CollectionActor<T: OrderedEntity> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: OrderedEntity> CollectionActor<T> {
    /// Creates a new `CollectionActor` and its associated
    /// [`CollectionClient`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When full, client
    ///   calls wait until the actor drains it.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    /// All entities cloned out of the store, sorted by position.
    fn ordered(&self) -> Vec<T> {
        let mut items: Vec<T> = self.store.values().cloned().collect();
        position::sort_by_position(&mut items);
        items
    }

    /// Drains the store into a position-sorted vector for mutation.
    fn take_ordered(&mut self) -> Vec<T> {
        let mut items: Vec<T> = self.store.drain().map(|(_, item)| item).collect();
        position::sort_by_position(&mut items);
        items
    }

    fn put_back(&mut self, items: Vec<T>) {
        for item in items {
            self.store.insert(item.id().clone(), item);
        }
    }

    /// Resolves raw batch keys to stored entity ids.
    ///
    /// A key resolves only if it parses as a `T::Id` *and* that id is in
    /// the store. Everything else is dropped here - silently, per the
    /// reorder contract.
    fn resolve_targets(&self, targets: &HashMap<String, u32>) -> HashMap<T::Id, u32> {
        targets
            .iter()
            .filter_map(|(key, &target)| {
                let id = key.parse::<T::Id>().ok()?;
                self.store.contains_key(&id).then_some((id, target))
            })
            .collect()
    }

    /// Runs the actor's event loop until the channel closes.
    ///
    /// # Context Injection
    /// `context` is handed to every entity hook, so dependencies created
    /// after the actor (e.g. clients of other actors) can still reach it.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, not the full module path.
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            let mut items = self.take_ordered();
                            position::insert_item(&mut items, item);
                            self.put_back(items);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                CollectionRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                CollectionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        // Destroy guard runs before any state is touched;
                        // a veto leaves the collection exactly as it was.
                        if let Err(e) = item.before_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "Delete refused");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        let mut items = self.take_ordered();
                        position::renormalize(&mut items);
                        self.put_back(items);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                CollectionRequest::List { respond_to } => {
                    let items = self.ordered();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                CollectionRequest::Reorder {
                    targets,
                    respond_to,
                } => {
                    debug!(entity_type, batch = targets.len(), "Reorder");
                    let resolved = self.resolve_targets(&targets);
                    let skipped = targets.len() - resolved.len();
                    let mut items = self.take_ordered();
                    position::apply_targets(&mut items, |item| resolved.get(item.id()).copied());
                    self.put_back(items);
                    info!(entity_type, applied = resolved.len(), skipped, "Reordered");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
