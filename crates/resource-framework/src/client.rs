//! # Generic Client
//!
//! The typed handle used to talk to a `ResourceActor`.

use crate::entity::Resource;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::page::{Page, PageRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a resource backend.
///
/// Holds only the channel sender, so cloning is cheap and clones can be shared across
/// tasks. Every method sends one request and awaits the backend's reply.
#[derive(Clone)]
pub struct ResourceClient<T: Resource> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::BackendClosed)?;
        response.await.map_err(|_| FrameworkError::ResponseDropped)?
    }

    /// Creates a record and returns it as stored, id included.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn list(&self, query: PageRequest<T::Filter>) -> Result<Page<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { query, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
