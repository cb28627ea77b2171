//! Custom actions for the Tutor backend: photos and pet links.

use crate::model::{PetId, Photo, PhotoId, PhotoUpload};

#[derive(Debug, Clone)]
pub enum TutorAction {
    /// Stores the upload as the tutor's photo, replacing any previous one.
    AttachPhoto(PhotoUpload),
    /// Removes the tutor's photo if it has this id.
    RemovePhoto(PhotoId),
    /// Links an existing pet.
    ///
    /// # Errors
    /// Fails if the pet does not exist or is already linked.
    LinkPet(PetId),
    /// Removes a pet link.
    UnlinkPet(PetId),
}

/// Results from TutorActions - variants match 1:1 with TutorAction
#[derive(Debug, Clone, PartialEq)]
pub enum TutorActionResult {
    AttachPhoto(Photo),
    RemovePhoto(()),
    LinkPet(()),
    UnlinkPet(()),
}
