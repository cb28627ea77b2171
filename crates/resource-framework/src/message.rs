//! # Backend Messages
//!
//! The requests a `ResourceClient` sends to its `ResourceActor`, each carrying a
//! one-shot channel for the reply.

use crate::entity::Resource;
use crate::error::FrameworkError;
use crate::page::{Page, PageRequest};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by backends.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request to a resource backend.
///
/// The variants follow the REST surface the facades talk to: create, read one,
/// update, delete, list a page, plus a custom `Action` for operations such as
/// photo upload or linking a pet to a tutor.
///
/// Generic over `T: Resource`, so a payload can only reach the backend of its
/// own resource type.
#[derive(Debug)]
pub enum ResourceRequest<T: Resource> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    List {
        query: PageRequest<T::Filter>,
        respond_to: Response<Page<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: Resource> ResourceRequest<T> {
    /// Short operation name, used in logs and mock diagnostics.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Get { .. } => "get",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::List { .. } => "list",
            Self::Action { .. } => "action",
        }
    }
}
