//! # ResourceFacade Trait
//!
//! Shared surface of resource-specific facades: read one, delete and list come for free
//! on top of the inner `ResourceClient`, with errors mapped into the facade's own type.
use crate::{FrameworkError, Page, PageRequest, Resource, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific facades to inherit the plain read/delete/list calls.
///
/// Implementors provide the inner client and an error mapping; operations that need
/// validation (create, update) stay on the implementor.
///
/// # Example
///
/// ```rust
/// use resource_framework::{FrameworkError, Resource, ResourceClient, ResourceFacade};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] struct TagCreate;
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl Resource for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = ();
///     type Filter = ();
///     type Action = TagAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TagError;
///
///     fn from_create_params(id: u32, _: TagCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: TagAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct TagFacade {
///     inner: ResourceClient<Tag>,
/// }
///
/// #[async_trait]
/// impl ResourceFacade<Tag> for TagFacade {
///     type Error = String;
///
///     fn inner(&self) -> &ResourceClient<Tag> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         e.to_string()
///     }
/// }
///
/// async fn usage(facade: TagFacade) {
///     // find_by_id(), delete() and list() are provided.
///     let _ = facade.find_by_id(1).await;
///     let _ = facade.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ResourceFacade<T: Resource>: Send + Sync {
    /// The facade's error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the facade's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch one record by id.
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete one record by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Fetch one page of records.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: PageRequest<T::Filter>) -> Result<Page<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }
}
