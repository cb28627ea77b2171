//! # Pet Facade
//!
//! The entry point the UI layer uses for pets. Create and update run the request rules
//! first and only reach the backend with a sanitized payload; everything else is
//! forwarded as is. [`PetFacade::find_details`] also asks the tutor backend who owns
//! the pet.
use crate::model::{
    Pet, PetDetails, PetFilter, PetId, PetRequest, Photo, PhotoId, PhotoUpload, Tutor,
    TutorFilter,
};
use crate::pet_actor::{PetAction, PetActionResult, PetError};
use crate::validation::RequestRules;
use async_trait::async_trait;
use resource_framework::{FrameworkError, Page, PageRequest, ResourceClient, ResourceFacade};
use tracing::{debug, instrument, warn};

/// Facade over the Pet backend.
///
/// `find_by_id`, `delete` and `list` come from [`ResourceFacade`].
#[derive(Clone)]
pub struct PetFacade {
    inner: ResourceClient<Pet>,
    tutors: ResourceClient<Tutor>,
    page_size: u32,
}

#[async_trait]
impl ResourceFacade<Pet> for PetFacade {
    type Error = PetError;

    fn inner(&self) -> &ResourceClient<Pet> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        PetError::from(e)
    }
}

impl PetFacade {
    /// `tutors` answers [`find_details`](Self::find_details); `page_size` is used by
    /// [`first_page`](Self::first_page).
    pub fn new(inner: ResourceClient<Pet>, tutors: ResourceClient<Tutor>, page_size: u32) -> Self {
        Self {
            inner,
            tutors,
            page_size,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn prepare(request: &PetRequest) -> Result<PetRequest, PetError> {
        request.prepare().map_err(|e| {
            warn!(field = e.field(), error = %e, "Request rejected before sending");
            PetError::from(e)
        })
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: PetRequest) -> Result<Pet, PetError> {
        debug!(?request, "create called");
        let request = Self::prepare(&request)?;
        self.inner.create(request).await.map_err(PetError::from)
    }

    /// Replaces name, breed and age of pet `id`.
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: PetId, request: PetRequest) -> Result<Pet, PetError> {
        debug!(?request, "update called");
        let request = Self::prepare(&request)?;
        self.inner.update(id, request).await.map_err(PetError::from)
    }

    /// Page `page` (zero-based) of pets matching `filter`.
    pub async fn find_all(
        &self,
        page: u32,
        size: u32,
        filter: PetFilter,
    ) -> Result<Page<Pet>, PetError> {
        self.list(PageRequest::new(page, size, filter)).await
    }

    /// First page with the configured page size.
    pub async fn first_page(&self, filter: PetFilter) -> Result<Page<Pet>, PetError> {
        self.find_all(0, self.page_size, filter).await
    }

    /// Pet `id` with every tutor linked to it, or `None` if the pet does not exist.
    #[instrument(skip(self))]
    pub async fn find_details(&self, id: PetId) -> Result<Option<PetDetails>, PetError> {
        let Some(pet) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut tutores = Vec::new();
        let mut page = 0;
        loop {
            let query = PageRequest::new(page, self.page_size.max(1), TutorFilter::by_pet(id));
            let batch = self
                .tutors
                .list(query)
                .await
                .map_err(|e| PetError::TutorLookup(e.to_string()))?;
            let more = batch.has_next();
            tutores.extend(batch.content);
            if !more {
                break;
            }
            page += 1;
        }

        debug!(tutores = tutores.len(), "Pet details loaded");
        Ok(Some(PetDetails { pet, tutores }))
    }

    #[instrument(skip(self, upload))]
    pub async fn upload_photo(&self, id: PetId, upload: PhotoUpload) -> Result<Photo, PetError> {
        debug!(?upload, "Uploading photo");
        match self
            .inner
            .perform_action(id, PetAction::AttachPhoto(upload))
            .await?
        {
            PetActionResult::AttachPhoto(photo) => Ok(photo),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_photo(&self, id: PetId, photo_id: PhotoId) -> Result<(), PetError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, PetAction::RemovePhoto(photo_id))
            .await?
        {
            PetActionResult::RemovePhoto(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: PetActionResult) -> PetError {
    PetError::Backend(format!("Unexpected action result: {result:?}"))
}
