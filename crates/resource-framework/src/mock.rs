//! # Mock Backends & Testing Guide
//!
//! Facades are tested without spawning a real backend: the client is wired to a
//! channel the test controls.
//!
//! | Feature | Mock | Real backend |
//! |---------|------|--------------|
//! | **Speed** | Instant | Fast (one tokio task) |
//! | **Determinism** | Full | Subject to scheduler |
//! | **State** | Scripted replies | Real records |
//! | **Use case** | Logic *around* the client (validation, mapping) | The backend itself, full flows |
//! | **Error injection** | `return_err` | Needs the right state |
//!
//! ## Raw channel helpers
//!
//! [`create_mock_client`] returns a client and the receiving end of its channel. The
//! `expect_*` helpers pull the next request and hand back its payload and responder, and
//! [`assert_no_requests`] checks that nothing was sent at all, which is how tests prove a
//! rejected request never reached the backend.
//!
//! ```rust
//! use resource_framework::mock::{assert_no_requests, create_mock_client, expect_get};
//! use resource_framework::Resource;
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Tag { id: u32 }
//! #[derive(Debug)] struct TagCreate;
//! #[derive(Debug)] enum TagAction {}
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl Resource for Tag {
//!     type Id = u32; type Create = TagCreate; type Update = (); type Filter = ();
//!     type Action = TagAction; type ActionResult = (); type Context = (); type Error = TagError;
//!     fn from_create_params(id: u32, _: TagCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: TagAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, mut receiver) = create_mock_client::<Tag>(4);
//!     assert_no_requests(&mut receiver);
//!
//!     let task = tokio::spawn(async move { client.get(7).await });
//!     let (id, responder) = expect_get(&mut receiver).await.unwrap();
//!     assert_eq!(id, 7);
//!     responder.send(Ok(Some(Tag { id }))).unwrap();
//!
//!     assert!(task.await.unwrap().unwrap().is_some());
//! }
//! ```
//!
//! ## Scripted replies
//!
//! [`MockClient`] answers requests from a queue of expectations, in order. Requests that
//! do not match the next expectation are recorded, their responder is dropped (the caller
//! sees [`FrameworkError::ResponseDropped`]), and [`MockClient::verify`] reports them.

use crate::client::ResourceClient;
use crate::entity::Resource;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::page::{Page, PageRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot};

type Reply<R> = oneshot::Sender<Result<R, FrameworkError>>;

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// The scripted reply for one expected request.
enum MockResponse<T: Resource> {
    Get(Result<Option<T>, FrameworkError>),
    Create(Result<T, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    List(Result<Page<T>, FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
}

/// One queued expectation. `id` is checked when present.
struct Expectation<T: Resource> {
    id: Option<T::Id>,
    response: MockResponse<T>,
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock backend answering from scripted expectations.
///
/// ```ignore
/// let mut mock = MockClient::<Tutor>::new();
/// mock.expect_create().return_ok(tutor);
/// mock.expect_get(TutorId(1)).return_ok(None);
///
/// let facade = TutorFacade::new(mock.client(), 10);
/// // exercise the facade...
/// mock.verify();
/// ```
pub struct MockClient<T: Resource> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    unexpected: Arc<Mutex<Vec<&'static str>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Resource> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let unexpected = Arc::new(Mutex::new(Vec::new()));

        let queue = expectations.clone();
        let rejected = unexpected.clone();
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expected = lock(&queue).pop_front();
                if let Some(operation) = answer(request, expected) {
                    lock(&rejected).push(operation);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            unexpected,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &mut self,
        id: Option<T::Id>,
        wrap: fn(Result<R, FrameworkError>) -> MockResponse<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` of `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), MockResponse::Get)
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(None, MockResponse::Create)
    }

    /// Expects an `update` of `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), MockResponse::Update)
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id), MockResponse::Delete)
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Page<T>> {
        self.builder(None, MockResponse::List)
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Some(id), MockResponse::Action)
    }

    /// Panics unless every expectation was consumed and no unexpected request arrived.
    pub fn verify(&self) {
        let unexpected = lock(&self.unexpected);
        if !unexpected.is_empty() {
            panic!("Unexpected requests: {:?}", *unexpected);
        }
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

fn id_matches<T: Resource>(expected: &Option<T::Id>, actual: &T::Id) -> bool {
    expected.as_ref().map_or(true, |id| id == actual)
}

/// Replies to `request` from `expected`; returns the operation name when they do not match.
fn answer<T: Resource>(
    request: ResourceRequest<T>,
    expected: Option<Expectation<T>>,
) -> Option<&'static str> {
    let Some(Expectation { id: want, response }) = expected else {
        return Some(request.operation());
    };

    match (request, response) {
        (ResourceRequest::Get { id, respond_to }, MockResponse::Get(reply))
            if id_matches::<T>(&want, &id) =>
        {
            let _ = respond_to.send(reply);
        }
        (ResourceRequest::Create { respond_to, .. }, MockResponse::Create(reply)) => {
            let _ = respond_to.send(reply);
        }
        (ResourceRequest::Update { id, respond_to, .. }, MockResponse::Update(reply))
            if id_matches::<T>(&want, &id) =>
        {
            let _ = respond_to.send(reply);
        }
        (ResourceRequest::Delete { id, respond_to }, MockResponse::Delete(reply))
            if id_matches::<T>(&want, &id) =>
        {
            let _ = respond_to.send(reply);
        }
        (ResourceRequest::List { respond_to, .. }, MockResponse::List(reply)) => {
            let _ = respond_to.send(reply);
        }
        (ResourceRequest::Action { id, respond_to, .. }, MockResponse::Action(reply))
            if id_matches::<T>(&want, &id) =>
        {
            let _ = respond_to.send(reply);
        }
        (request, _) => return Some(request.operation()),
    }
    None
}

/// Builder for one expectation; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: Resource, R> {
    id: Option<T::Id>,
    wrap: fn(Result<R, FrameworkError>) -> MockResponse<T>,
    expectations: Queue<T>,
}

impl<T: Resource, R> ExpectationBuilder<T, R> {
    /// Replies with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Replies with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        lock(&self.expectations).push_back(Expectation {
            id: self.id,
            response: (self.wrap)(response),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver of its channel.
///
/// Nothing answers the requests: the test pulls them with the `expect_*` helpers and
/// replies through the returned responders.
pub fn create_mock_client<T: Resource>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Panics if any request is waiting on the channel.
pub fn assert_no_requests<T: Resource>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) {
    if let Ok(request) = receiver.try_recv() {
        panic!("Expected no backend request, got `{}`", request.operation());
    }
}

/// Next request, if it is a Create.
pub async fn expect_create<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Reply<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Get.
pub async fn expect_get<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Reply<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Update.
pub async fn expect_update<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Reply<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a List.
pub async fn expect_list<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(PageRequest<T::Filter>, Reply<Page<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: Resource>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Reply<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
