use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::photo::Photo;
use super::tutor::Tutor;
use crate::validation::{is_blank, trimmed_or_absent, RequestRules, ValidationError};

/// Type-safe identifier for Pets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub u32);

impl From<u32> for PetId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pet, as the backend returns it.
///
/// # Resource Framework
/// This struct implements the [`Resource`](resource_framework::Resource) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_framework::ResourceActor).
///
/// Created from a [`PetRequest`], listed through a [`PetFilter`]; see [`crate::pet_actor`]
/// for the photo actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idade: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foto: Option<Photo>,
}

impl Pet {
    /// Builds a pet without photo from an already sanitized request.
    pub fn new(id: PetId, request: PetRequest) -> Self {
        Self {
            id,
            nome: request.nome,
            raca: request.raca,
            idade: request.idade,
            foto: None,
        }
    }
}

/// A pet together with the tutors it is linked to.
///
/// Serializes as the pet's own fields plus `tutores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDetails {
    #[serde(flatten)]
    pub pet: Pet,
    #[serde(default)]
    pub tutores: Vec<Tutor>,
}

/// Payload for creating or replacing a pet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetRequest {
    #[serde(default)]
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idade: Option<u32>,
}

impl PetRequest {
    pub fn new(nome: impl Into<String>) -> Self {
        Self {
            nome: nome.into(),
            ..Self::default()
        }
    }

    pub fn with_raca(mut self, raca: impl Into<String>) -> Self {
        self.raca = Some(raca.into());
        self
    }

    pub fn with_idade(mut self, idade: u32) -> Self {
        self.idade = Some(idade);
        self
    }
}

impl RequestRules for PetRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(Some(self.nome.as_str())) {
            return Err(ValidationError::PetNameRequired);
        }
        Ok(())
    }

    fn sanitize(&self) -> Self {
        Self {
            nome: self.nome.trim().to_string(),
            raca: trimmed_or_absent(self.raca.as_deref()),
            idade: self.idade,
        }
    }
}

/// List criteria for pets. Blank criteria are ignored; the rest match as
/// case-insensitive substrings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetFilter {
    pub nome: Option<String>,
    pub raca: Option<String>,
}

impl PetFilter {
    pub fn by_nome(nome: impl Into<String>) -> Self {
        Self {
            nome: Some(nome.into()),
            raca: None,
        }
    }

    pub fn by_raca(raca: impl Into<String>) -> Self {
        Self {
            nome: None,
            raca: Some(raca.into()),
        }
    }

    pub fn accepts(&self, pet: &Pet) -> bool {
        super::contains_ignore_case(Some(pet.nome.as_str()), self.nome.as_deref())
            && super::contains_ignore_case(pet.raca.as_deref(), self.raca.as_deref())
    }
}
