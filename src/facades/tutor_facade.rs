//! # Tutor Facade
//!
//! Create and update validate the request (name, phone, CPF check digits) before anything
//! is sent; the CPF travels as digits only.
use crate::model::{PetId, Photo, PhotoId, PhotoUpload, Tutor, TutorFilter, TutorId, TutorRequest};
use crate::tutor_actor::{TutorAction, TutorActionResult, TutorError};
use crate::validation::RequestRules;
use async_trait::async_trait;
use resource_framework::{FrameworkError, Page, PageRequest, ResourceClient, ResourceFacade};
use tracing::{debug, info, instrument, warn};

/// Facade over the Tutor backend.
#[derive(Clone)]
pub struct TutorFacade {
    inner: ResourceClient<Tutor>,
    page_size: u32,
}

#[async_trait]
impl ResourceFacade<Tutor> for TutorFacade {
    type Error = TutorError;

    fn inner(&self) -> &ResourceClient<Tutor> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        TutorError::from(e)
    }
}

impl TutorFacade {
    pub fn new(inner: ResourceClient<Tutor>, page_size: u32) -> Self {
        Self { inner, page_size }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn prepare(request: &TutorRequest) -> Result<TutorRequest, TutorError> {
        request.prepare().map_err(|e| {
            warn!(field = e.field(), error = %e, "Request rejected before sending");
            TutorError::from(e)
        })
    }

    async fn act(&self, id: TutorId, action: TutorAction) -> Result<TutorActionResult, TutorError> {
        Ok(self.inner.perform_action(id, action).await?)
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: TutorRequest) -> Result<Tutor, TutorError> {
        debug!(?request, "create called");
        let request = Self::prepare(&request)?;
        self.inner.create(request).await.map_err(TutorError::from)
    }

    #[instrument(skip(self, request))]
    pub async fn update(&self, id: TutorId, request: TutorRequest) -> Result<Tutor, TutorError> {
        debug!(?request, "update called");
        let request = Self::prepare(&request)?;
        self.inner.update(id, request).await.map_err(TutorError::from)
    }

    pub async fn find_all(
        &self,
        page: u32,
        size: u32,
        filter: TutorFilter,
    ) -> Result<Page<Tutor>, TutorError> {
        self.list(PageRequest::new(page, size, filter)).await
    }

    pub async fn first_page(&self, filter: TutorFilter) -> Result<Page<Tutor>, TutorError> {
        self.find_all(0, self.page_size, filter).await
    }

    #[instrument(skip(self, upload))]
    pub async fn upload_photo(
        &self,
        id: TutorId,
        upload: PhotoUpload,
    ) -> Result<Photo, TutorError> {
        debug!(?upload, "Uploading photo");
        match self.act(id, TutorAction::AttachPhoto(upload)).await? {
            TutorActionResult::AttachPhoto(photo) => Ok(photo),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_photo(&self, id: TutorId, photo_id: PhotoId) -> Result<(), TutorError> {
        match self.act(id, TutorAction::RemovePhoto(photo_id)).await? {
            TutorActionResult::RemovePhoto(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn link_pet(&self, tutor_id: TutorId, pet_id: PetId) -> Result<(), TutorError> {
        match self.act(tutor_id, TutorAction::LinkPet(pet_id)).await? {
            TutorActionResult::LinkPet(()) => {
                info!("Pet linked");
                Ok(())
            }
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn unlink_pet(&self, tutor_id: TutorId, pet_id: PetId) -> Result<(), TutorError> {
        match self.act(tutor_id, TutorAction::UnlinkPet(pet_id)).await? {
            TutorActionResult::UnlinkPet(()) => {
                info!("Pet unlinked");
                Ok(())
            }
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: TutorActionResult) -> TutorError {
    TutorError::Backend(format!("Unexpected action result: {result:?}"))
}
