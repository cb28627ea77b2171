//! Custom actions for the Pet backend.
//!
//! These are the operations on a [`Pet`](crate::model::Pet) beyond plain CRUD, handled by
//! [`Resource::handle_action`](resource_framework::Resource::handle_action).

use crate::model::{Photo, PhotoId, PhotoUpload};

/// Photo operations on a pet.
#[derive(Debug, Clone)]
pub enum PetAction {
    /// Stores the upload as the pet's photo, replacing any previous one.
    AttachPhoto(PhotoUpload),
    /// Removes the pet's photo.
    ///
    /// # Errors
    /// Fails if the pet's current photo does not have this id.
    RemovePhoto(PhotoId),
}

/// Results from PetActions - variants match 1:1 with PetAction
#[derive(Debug, Clone, PartialEq)]
pub enum PetActionResult {
    /// The stored photo
    AttachPhoto(Photo),
    RemovePhoto(()),
}
