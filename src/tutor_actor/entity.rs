//! Resource trait implementation for the Tutor record.
//!
//! Linking a pet asks the pet backend (injected through [`TutorContext`]) whether the pet
//! exists and keeps a copy of it on the tutor. Every read replaces those copies with the
//! pets as the pet backend has them now, and drops links to pets that were deleted.

use async_trait::async_trait;
use resource_framework::Resource;
use tracing::debug;

use super::actions::{TutorAction, TutorActionResult};
use super::error::TutorError;
use super::TutorContext;
use crate::model::{Pet, PetId, Photo, Tutor, TutorFilter, TutorId, TutorRequest};
use crate::validation::RequestRules;

#[async_trait]
impl Resource for Tutor {
    type Id = TutorId;
    type Create = TutorRequest;
    type Update = TutorRequest;
    type Filter = TutorFilter;
    type Action = TutorAction;
    type ActionResult = TutorActionResult;
    type Context = TutorContext;
    type Error = TutorError;

    fn from_create_params(id: TutorId, params: TutorRequest) -> Result<Self, Self::Error> {
        Ok(Tutor::new(id, params.prepare()?))
    }

    fn matches(&self, filter: &TutorFilter) -> bool {
        filter.accepts(self)
    }

    async fn on_read(&mut self, ctx: &TutorContext) -> Result<(), Self::Error> {
        let mut live = Vec::with_capacity(self.pets.len());
        for linked in &self.pets {
            match lookup_pet(ctx, linked.id).await? {
                Some(pet) => live.push(pet),
                None => debug!(
                    tutor_id = %self.id,
                    pet_id = %linked.id,
                    "Dropping link to deleted pet"
                ),
            }
        }
        self.pets = live;
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: TutorRequest,
        _ctx: &TutorContext,
    ) -> Result<(), Self::Error> {
        self.apply(update.prepare()?);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TutorAction,
        ctx: &TutorContext,
    ) -> Result<TutorActionResult, Self::Error> {
        match action {
            TutorAction::AttachPhoto(upload) => {
                if upload.bytes.is_empty() {
                    return Err(TutorError::EmptyPhoto);
                }
                let photo_id = ctx.photos.next().ok_or(TutorError::PhotoIdsExhausted)?;
                let photo = Photo::stored(photo_id, "tutores", self.id, upload);
                self.foto = Some(photo.clone());
                Ok(TutorActionResult::AttachPhoto(photo))
            }
            TutorAction::RemovePhoto(photo_id) => match &self.foto {
                Some(photo) if photo.id == photo_id => {
                    self.foto = None;
                    Ok(TutorActionResult::RemovePhoto(()))
                }
                _ => Err(TutorError::PhotoNotFound {
                    tutor: self.id,
                    photo: photo_id,
                }),
            },
            TutorAction::LinkPet(pet_id) => {
                self.link_pet(pet_id, ctx).await?;
                Ok(TutorActionResult::LinkPet(()))
            }
            TutorAction::UnlinkPet(pet_id) => {
                if !self.has_pet(pet_id) {
                    return Err(TutorError::NotLinked {
                        tutor: self.id,
                        pet: pet_id,
                    });
                }
                self.pets.retain(|pet| pet.id != pet_id);
                Ok(TutorActionResult::UnlinkPet(()))
            }
        }
    }
}

impl Tutor {
    async fn link_pet(&mut self, pet_id: PetId, ctx: &TutorContext) -> Result<(), TutorError> {
        if self.has_pet(pet_id) {
            return Err(TutorError::AlreadyLinked {
                tutor: self.id,
                pet: pet_id,
            });
        }

        debug!(tutor_id = %self.id, pet_id = %pet_id, "Looking up pet to link");
        let pet = lookup_pet(ctx, pet_id)
            .await?
            .ok_or(TutorError::PetNotFound(pet_id))?;

        self.pets.push(pet);
        Ok(())
    }
}

async fn lookup_pet(ctx: &TutorContext, pet_id: PetId) -> Result<Option<Pet>, TutorError> {
    ctx.pets
        .get(pet_id)
        .await
        .map_err(|e| TutorError::PetLookup(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PetRequest, PhotoIds, PhotoUpload};
    use crate::pet_actor;
    use resource_framework::mock::create_mock_client;

    fn ana() -> Tutor {
        Tutor::new(TutorId(1), TutorRequest::new("Ana", "11999999999"))
    }

    #[test]
    fn test_create_applies_request_rules() {
        let tutor = Tutor::from_create_params(
            TutorId(1),
            TutorRequest::new(" Ana ", " 1199 ").with_cpf("529.982.247-25"),
        )
        .unwrap();
        assert_eq!(tutor.nome, "Ana");
        assert_eq!(tutor.cpf.as_deref(), Some("52998224725"));

        assert!(matches!(
            Tutor::from_create_params(TutorId(2), TutorRequest::new("Ana", "1199").with_cpf("1")),
            Err(TutorError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_link_and_unlink_pet() {
        let (actor, pets) = pet_actor::new(8);
        tokio::spawn(actor.run(PhotoIds::new()));
        let rex = pets.create(PetRequest::new("Rex")).await.unwrap();

        let ctx = TutorContext::new(pets, PhotoIds::new());
        let mut tutor = ana();

        tutor
            .handle_action(TutorAction::LinkPet(rex.id), &ctx)
            .await
            .unwrap();
        assert_eq!(tutor.pets, vec![rex.clone()]);

        let twice = tutor.handle_action(TutorAction::LinkPet(rex.id), &ctx).await;
        assert_eq!(
            twice,
            Err(TutorError::AlreadyLinked {
                tutor: TutorId(1),
                pet: rex.id
            })
        );

        tutor
            .handle_action(TutorAction::UnlinkPet(rex.id), &ctx)
            .await
            .unwrap();
        assert!(tutor.pets.is_empty());

        let again = tutor.handle_action(TutorAction::UnlinkPet(rex.id), &ctx).await;
        assert!(matches!(again, Err(TutorError::NotLinked { .. })));
    }

    #[tokio::test]
    async fn test_link_unknown_pet() {
        let (actor, pets) = pet_actor::new(8);
        tokio::spawn(actor.run(PhotoIds::new()));
        let ctx = TutorContext::new(pets, PhotoIds::new());

        let mut tutor = ana();
        let result = tutor
            .handle_action(TutorAction::LinkPet(PetId(42)), &ctx)
            .await;
        assert_eq!(result, Err(TutorError::PetNotFound(PetId(42))));
    }

    #[tokio::test]
    async fn test_link_reports_unreachable_pet_backend() {
        let (pets, receiver) = create_mock_client(1);
        drop(receiver);
        let ctx = TutorContext::new(pets, PhotoIds::new());

        let mut tutor = ana();
        let result = tutor.handle_action(TutorAction::LinkPet(PetId(1)), &ctx).await;
        assert_eq!(
            result,
            Err(TutorError::PetLookup("Backend closed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_photo_url_uses_tutor_collection() {
        let (pets, _receiver) = create_mock_client(1);
        let ctx = TutorContext::new(pets, PhotoIds::new());

        let mut tutor = ana();
        let result = tutor
            .handle_action(
                TutorAction::AttachPhoto(PhotoUpload::new("ana.jpg", "image/jpeg", vec![7])),
                &ctx,
            )
            .await
            .unwrap();
        let TutorActionResult::AttachPhoto(photo) = result else {
            panic!("Expected AttachPhoto result");
        };
        assert_eq!(photo.url, "/v1/tutores/1/fotos/1");

        let wrong = tutor
            .handle_action(TutorAction::RemovePhoto(crate::model::PhotoId(2)), &ctx)
            .await;
        assert!(matches!(wrong, Err(TutorError::PhotoNotFound { .. })));
    }

    #[tokio::test]
    async fn test_read_shows_current_pets() {
        let (actor, pets) = pet_actor::new(8);
        tokio::spawn(actor.run(PhotoIds::new()));
        let rex = pets.create(PetRequest::new("Rex")).await.unwrap();
        let mia = pets.create(PetRequest::new("Mia")).await.unwrap();

        let ctx = TutorContext::new(pets.clone(), PhotoIds::new());
        let mut tutor = ana();
        for pet in [rex.id, mia.id] {
            tutor
                .handle_action(TutorAction::LinkPet(pet), &ctx)
                .await
                .unwrap();
        }

        pets.update(mia.id, PetRequest::new("Mia Renamed"))
            .await
            .unwrap();
        pets.delete(rex.id).await.unwrap();

        tutor.on_read(&ctx).await.unwrap();
        let names: Vec<(PetId, &str)> = tutor
            .pets
            .iter()
            .map(|pet| (pet.id, pet.nome.as_str()))
            .collect();
        assert_eq!(names, vec![(mia.id, "Mia Renamed")]);
        assert!(!tutor.has_pet(rex.id));
    }

    #[tokio::test]
    async fn test_read_without_pets_skips_the_pet_backend() {
        let (pets, mut receiver) = create_mock_client(1);
        let ctx = TutorContext::new(pets, PhotoIds::new());

        let mut tutor = ana();
        tutor.on_read(&ctx).await.unwrap();
        resource_framework::mock::assert_no_requests(&mut receiver);
    }
}
