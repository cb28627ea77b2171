//! # Resource Trait
//!
//! The `Resource` trait is the contract every record kept by a [`ResourceActor`](crate::ResourceActor)
//! must satisfy (pets, tutors, ...). It names the identifier, the create/update payloads,
//! the list filter, the custom actions and their results, the injected context and the
//! error type, and it exposes lifecycle hooks (`on_create`, `on_read`, `on_update`,
//! `on_delete`, `handle_action`) plus a `matches` predicate used by list queries.
//!
//! # Provided Methods (Hooks)
//! - [`Resource::on_create`], [`Resource::on_read`] and [`Resource::on_delete`] default
//!   to `Ok(())`.
//! - [`Resource::matches`] defaults to accepting every record.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any record must implement to be served by a `ResourceActor`.
///
/// Associated types keep every payload tied to its resource: a tutor backend only
/// accepts a tutor payload, and the compiler rejects anything else.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await other backends. The `Context` value
/// is handed to `run()` and passed to every hook ("late binding" of dependencies).
#[async_trait]
pub trait Resource: Clone + Send + Sync + 'static {
    /// The unique identifier. Generated sequentially from `u32`, ordered for listing.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The payload accepted on creation.
    type Create: Send + Sync + Debug;

    /// The payload accepted on update.
    type Update: Send + Sync + Debug;

    /// Criteria accepted by list queries.
    type Filter: Send + Sync + Debug + Default;

    /// Resource-specific operations (e.g. attaching a photo).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the backend. Use `()` when there are none.
    type Context: Send + Sync;

    /// The error type raised by hooks.
    ///
    /// One enum per resource, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the record from its freshly assigned id and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this record satisfies a list filter.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the record is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before a stored record is returned by `get`, `list` or `update`.
    ///
    /// Refreshes data owned by other backends. The refreshed record replaces the stored
    /// one; on error the caller gets [`FrameworkError::Rejected`](crate::FrameworkError::Rejected)
    /// and the store is left as it was.
    async fn on_read(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload in place.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called right before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
