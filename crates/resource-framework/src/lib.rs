//! # Resource Framework
//!
//! Building blocks for talking to a resource-oriented backend (pets, tutors, ...) through
//! typed, channel-based clients. Every resource type gets its own backend task with isolated
//! state, and callers only ever hold a cheap, cloneable client.
//!
//! ## Why a channel-backed client?
//!
//! - The facades of the application only need *a client*: they validate and sanitize a
//!   request, then forward it. Whether the other end is an in-memory backend or a scripted
//!   mock is invisible to them.
//! - Each backend processes its requests **sequentially**, so its store needs no lock.
//! - Tests can take the receiving end of the channel and prove that a rejected request
//!   never reached the backend at all.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`Resource`]) - the domain records and their hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing, id assignment, paging
//! 3. **Interface Layer** ([`ResourceClient`], [`ResourceFacade`]) - typed communication
//!
//! ## Example
//!
//! ```rust
//! use resource_framework::{PageRequest, Resource, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct UserCreate { name: String }
//! #[derive(Debug)] struct UserUpdate { name: Option<String> }
//! #[derive(Debug, Default)] struct UserFilter { name: Option<String> }
//! #[derive(Debug)] enum UserAction {}
//! #[derive(Debug, thiserror::Error)] #[error("user error")] struct UserError;
//!
//! #[async_trait]
//! impl Resource for User {
//!     type Id = u32;
//!     type Create = UserCreate;
//!     type Update = UserUpdate;
//!     type Filter = UserFilter;
//!     type Action = UserAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = UserError;
//!
//!     fn from_create_params(id: u32, params: UserCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//!
//!     fn matches(&self, filter: &UserFilter) -> bool {
//!         filter.name.as_deref().map_or(true, |name| self.name.contains(name))
//!     }
//!
//!     async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(name) = update.name { self.name = name; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: UserAction, _: &()) -> Result<(), Self::Error> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<User>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let alice = client.create(UserCreate { name: "Alice".into() }).await.unwrap();
//!     client.create(UserCreate { name: "Bob".into() }).await.unwrap();
//!
//!     let page = client
//!         .list(PageRequest::new(0, 10, UserFilter { name: Some("Ali".into()) }))
//!         .await
//!         .unwrap();
//!     assert_eq!(page.total, 1);
//!     assert_eq!(page.content[0].id, alice.id);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run()`, not to `new()`. A tutor backend that must check
//! that a pet exists before linking it receives the pet client as its context, after both
//! backends have been created.
//!
//! ## Testing
//!
//! The [`mock`] module wires a `ResourceClient<T>` to a channel the test controls, either
//! scripted ([`mock::MockClient`]) or raw ([`mock::create_mock_client`]).

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod facade;
pub mod message;
pub mod mock;
pub mod page;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::Resource;
pub use error::FrameworkError;
pub use facade::ResourceFacade;
pub use message::{ResourceRequest, Response};
pub use page::{Page, PageRequest};
