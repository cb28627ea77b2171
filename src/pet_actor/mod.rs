//! # Pet Backend
//!
//! The in-memory stand-in for the pets endpoint of the REST API.
//!
//! ## Structure
//!
//! - [`entity`] - [`Resource`](resource_framework::Resource) implementation for [`Pet`]
//! - [`error`] - [`PetError`], shared with [`PetFacade`](crate::facades::PetFacade)
//! - [`actions`] - [`PetAction`] and [`PetActionResult`] for photos
//! - [`new()`] - Factory function that creates the backend and its client
//!
//! ## Usage
//!
//! ```rust
//! use pet_manager::model::{PetRequest, PhotoIds};
//! use pet_manager::pet_actor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = pet_actor::new(8);
//!     tokio::spawn(actor.run(PhotoIds::new()));
//!
//!     let pet = client.create(PetRequest::new("Rex")).await.unwrap();
//!     assert_eq!(pet.id.0, 1);
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Pet;
use resource_framework::{ResourceActor, ResourceClient};

/// Creates a new Pet backend and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Pet>, ResourceClient<Pet>) {
    ResourceActor::new(buffer_size)
}
