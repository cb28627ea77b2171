//! Error types for the Pet backend and facade.

use resource_framework::FrameworkError;
use thiserror::Error;

use crate::model::{PetId, PhotoId};
use crate::validation::ValidationError;

/// Errors that can occur during pet operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PetError {
    /// The request broke a validation rule; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested pet was not found.
    #[error("Pet not found: {0}")]
    NotFound(String),

    /// The pet has no photo with this id.
    #[error("Pet {pet} has no photo {photo}")]
    PhotoNotFound { pet: PetId, photo: PhotoId },

    /// The uploaded file has no content.
    #[error("Photo upload is empty")]
    EmptyPhoto,

    #[error("No photo ids left")]
    PhotoIdsExhausted,

    /// The tutor backend could not be asked about the pet's tutors.
    #[error("Tutor lookup failed: {0}")]
    TutorLookup(String),

    /// The backend refused the request for a reason this type does not model.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The backend could not be reached or did not answer.
    #[error("Backend communication error: {0}")]
    Backend(String),
}

impl From<FrameworkError> for PetError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => PetError::NotFound(id),
            FrameworkError::Rejected(source) => match source.downcast::<PetError>() {
                Ok(error) => *error,
                Err(other) => PetError::Rejected(other.to_string()),
            },
            other => PetError::Backend(other.to_string()),
        }
    }
}
