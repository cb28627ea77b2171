//! # Resource Backend
//!
//! `ResourceActor` is the server half of a resource: it owns the records of one type
//! and processes requests one at a time inside its own Tokio task, so the store needs
//! no lock.

use crate::client::ResourceClient;
use crate::entity::Resource;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::page::{Page, PageRequest};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic backend that manages a collection of records.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the backend and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `run(context)`.
/// 3.  **Run**: spawn `run` in a background task.
///
/// ```rust
/// use resource_framework::{Resource, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl Resource for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Filter = ();
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: params.text })
///     }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate { text: "hi".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: assigns the next sequential id (starting at 1), builds the record with
///   `from_create_params`, runs `on_create`, stores it and replies with the stored record.
///   Once `u32::MAX` has been handed out, creates fail with
///   [`FrameworkError::IdsExhausted`].
/// * **Get**: runs `on_read` and replies with the refreshed record, or `None`.
/// * **Update**: runs `on_update` then `on_read` on the stored record and replies with
///   its new state.
/// * **Delete**: runs `on_delete`, then removes the record.
/// * **List**: collects the records accepted by `matches`, in id order, cuts the
///   requested page and runs `on_read` on each record in it.
/// * **Action**: runs `handle_action` on the stored record.
///
/// A failing hook leaves the store untouched and replies with
/// [`FrameworkError::Rejected`].
pub struct ResourceActor<T: Resource> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    /// `None` once every id has been used.
    next_id: Option<u32>,
}

impl<T: Resource> ResourceActor<T> {
    /// Creates a backend and its client.
    ///
    /// `buffer_size` is the channel capacity; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: Some(1),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        // "Pet" instead of "pet_manager::model::pet::Pet"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Backend started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(raw_id) = self.next_id else {
                        warn!(entity_type, "Create failed: no ids left");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    let id = T::Id::from(raw_id);

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::rejected(e)));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::rejected(e)));
                        continue;
                    }

                    self.next_id = raw_id.checked_add(1);
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let reply = self.refresh(&id, &context).await;
                    match &reply {
                        Ok(item) => debug!(entity_type, %id, found = item.is_some(), "Get"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Get failed"),
                    }
                    let _ = respond_to.send(reply);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let reply = self.update(&id, update, &context).await;
                    match &reply {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(reply);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::rejected(e)));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::List { query, respond_to } => {
                    debug!(
                        entity_type,
                        page = query.page,
                        size = query.size,
                        filter = ?query.filter,
                        "List"
                    );
                    let reply = self.list(query, &context).await;
                    match &reply {
                        Ok(page) => debug!(entity_type, total = page.total, "Listed"),
                        Err(e) => warn!(entity_type, error = %e, "List failed"),
                    }
                    let _ = respond_to.send(reply);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut updated = item.clone();
                    let result = match updated.handle_action(action, &context).await {
                        Ok(result) => {
                            *item = updated;
                            info!(entity_type, %id, "Action ok");
                            Ok(result)
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            Err(FrameworkError::rejected(e))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Runs `on_read` on a copy of record `id` and stores the copy if the hook succeeds.
    async fn refresh(
        &mut self,
        id: &T::Id,
        context: &T::Context,
    ) -> Result<Option<T>, FrameworkError> {
        let Some(item) = self.store.get_mut(id) else {
            return Ok(None);
        };
        let mut fresh = item.clone();
        fresh
            .on_read(context)
            .await
            .map_err(|e| FrameworkError::rejected(e))?;
        *item = fresh.clone();
        Ok(Some(fresh))
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let Some(item) = self.store.get_mut(id) else {
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        // Hooks work on a copy so a failed update leaves the record unchanged.
        let mut updated = item.clone();
        updated
            .on_update(update, context)
            .await
            .map_err(|e| FrameworkError::rejected(e))?;
        updated
            .on_read(context)
            .await
            .map_err(|e| FrameworkError::rejected(e))?;
        *item = updated.clone();
        Ok(updated)
    }

    async fn list(
        &mut self,
        query: PageRequest<T::Filter>,
        context: &T::Context,
    ) -> Result<Page<T>, FrameworkError> {
        let matching: Vec<T::Id> = self
            .store
            .iter()
            .filter(|(_, item)| item.matches(&query.filter))
            .map(|(id, _)| id.clone())
            .collect();
        let ids = Page::from_matches(matching, query.page, query.size);

        let mut content = Vec::with_capacity(ids.content.len());
        for id in &ids.content {
            if let Some(item) = self.refresh(id, context).await? {
                content.push(item);
            }
        }
        Ok(ids.with_content(content))
    }
}
