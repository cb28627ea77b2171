//! # Tutor Backend
//!
//! The in-memory stand-in for the tutors endpoint of the REST API, including the
//! tutor-to-pet links.
//!
//! ## Structure
//!
//! - [`entity`] - [`Resource`](resource_framework::Resource) implementation for [`Tutor`]
//! - [`error`] - [`TutorError`], shared with [`TutorFacade`](crate::facades::TutorFacade)
//! - [`actions`] - [`TutorAction`] and [`TutorActionResult`]
//! - [`TutorContext`] - the dependencies handed to `run()`
//!
//! ## Dependencies
//!
//! Linking needs to know whether a pet exists, so the backend runs with a pet client in
//! its context:
//!
//! ```rust,ignore
//! let (pet_actor, pet_client) = pet_actor::new(32);
//! let (tutor_actor, tutor_client) = tutor_actor::new(32);
//!
//! tokio::spawn(pet_actor.run(photos.clone()));
//! tokio::spawn(tutor_actor.run(TutorContext::new(pet_client.clone(), photos)));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::{Pet, PhotoIds, Tutor};
use resource_framework::{ResourceActor, ResourceClient};

/// What the tutor backend needs from the rest of the system.
#[derive(Clone)]
pub struct TutorContext {
    pub pets: ResourceClient<Pet>,
    pub photos: PhotoIds,
}

impl TutorContext {
    pub fn new(pets: ResourceClient<Pet>, photos: PhotoIds) -> Self {
        Self { pets, photos }
    }
}

/// Creates a new Tutor backend and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Tutor>, ResourceClient<Tutor>) {
    ResourceActor::new(buffer_size)
}
