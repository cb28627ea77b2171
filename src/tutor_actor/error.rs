//! Error types for the Tutor backend and facade.

use resource_framework::FrameworkError;
use thiserror::Error;

use crate::model::{PetId, PhotoId, TutorId};
use crate::validation::ValidationError;

/// Errors that can occur during tutor operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TutorError {
    /// The request broke a validation rule; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested tutor was not found.
    #[error("Tutor not found: {0}")]
    NotFound(String),

    #[error("Tutor {tutor} has no photo {photo}")]
    PhotoNotFound { tutor: TutorId, photo: PhotoId },

    #[error("Photo upload is empty")]
    EmptyPhoto,

    #[error("No photo ids left")]
    PhotoIdsExhausted,

    /// The pet to link does not exist.
    #[error("Pet not found: {0}")]
    PetNotFound(PetId),

    #[error("Pet {pet} is already linked to tutor {tutor}")]
    AlreadyLinked { tutor: TutorId, pet: PetId },

    #[error("Pet {pet} is not linked to tutor {tutor}")]
    NotLinked { tutor: TutorId, pet: PetId },

    /// The pet backend could not be asked about the pet.
    #[error("Pet lookup failed: {0}")]
    PetLookup(String),

    /// The backend refused the request for a reason this type does not model.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The backend could not be reached or did not answer.
    #[error("Backend communication error: {0}")]
    Backend(String),
}

impl From<FrameworkError> for TutorError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => TutorError::NotFound(id),
            FrameworkError::Rejected(source) => match source.downcast::<TutorError>() {
                Ok(error) => *error,
                Err(other) => TutorError::Rejected(other.to_string()),
            },
            other => TutorError::Backend(other.to_string()),
        }
    }
}
