//! Resource trait implementation for the Pet record.
//!
//! Lets [`Pet`] be served by the generic [`resource_framework::ResourceActor`]. The backend
//! applies the same request rules as the facade, so a raw client cannot store a pet
//! without a name either.

use async_trait::async_trait;
use resource_framework::Resource;

use super::actions::{PetAction, PetActionResult};
use super::error::PetError;
use crate::model::{Pet, PetFilter, PetId, PetRequest, Photo, PhotoIds};
use crate::validation::RequestRules;

#[async_trait]
impl Resource for Pet {
    type Id = PetId;
    type Create = PetRequest;
    type Update = PetRequest;
    type Filter = PetFilter;
    type Action = PetAction;
    type ActionResult = PetActionResult;
    type Context = PhotoIds;
    type Error = PetError;

    fn from_create_params(id: PetId, params: PetRequest) -> Result<Self, Self::Error> {
        Ok(Pet::new(id, params.prepare()?))
    }

    fn matches(&self, filter: &PetFilter) -> bool {
        filter.accepts(self)
    }

    /// Replaces name, breed and age; the photo is kept.
    async fn on_update(&mut self, update: PetRequest, _ctx: &PhotoIds) -> Result<(), Self::Error> {
        let update = update.prepare()?;
        self.nome = update.nome;
        self.raca = update.raca;
        self.idade = update.idade;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PetAction,
        photos: &PhotoIds,
    ) -> Result<PetActionResult, Self::Error> {
        match action {
            PetAction::AttachPhoto(upload) => {
                if upload.bytes.is_empty() {
                    return Err(PetError::EmptyPhoto);
                }
                let photo_id = photos.next().ok_or(PetError::PhotoIdsExhausted)?;
                let photo = Photo::stored(photo_id, "pets", self.id, upload);
                self.foto = Some(photo.clone());
                Ok(PetActionResult::AttachPhoto(photo))
            }
            PetAction::RemovePhoto(photo_id) => match &self.foto {
                Some(photo) if photo.id == photo_id => {
                    self.foto = None;
                    Ok(PetActionResult::RemovePhoto(()))
                }
                _ => Err(PetError::PhotoNotFound {
                    pet: self.id,
                    photo: photo_id,
                }),
            },
        }
    }
}
