use tracing::{error, info};

use super::config::SystemConfig;
use crate::facades::{PetFacade, TutorFacade};
use crate::model::PhotoIds;
use crate::tutor_actor::TutorContext;
use crate::{pet_actor, tutor_actor};

/// Error returned when a backend task did not finish cleanly.
#[derive(Debug, thiserror::Error)]
#[error("Backend task failed: {0}")]
pub struct ShutdownError(String);

/// Owns the running backends and the facades in front of them.
///
/// - **Pet backend**: pets and their photos
/// - **Tutor backend**: tutors, their photos and pet links; gets a pet client as context
///
/// The pet facade also holds a tutor client, to answer which tutors a pet belongs to.
///
/// # Example
///
/// ```ignore
/// let system = PetSystem::new(SystemConfig::from_env());
///
/// let tutor = system.tutors.create(TutorRequest::new("Ana", "11999999999")).await?;
/// let pet = system.pets.create(PetRequest::new("Rex")).await?;
/// system.tutors.link_pet(tutor.id, pet.id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct PetSystem {
    pub pets: PetFacade,
    pub tutors: TutorFacade,

    /// Task handles for all running backends (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PetSystem {
    /// Spawns both backends and wires the tutor backend to the pet backend.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        info!(?config, "Starting pet system");

        // 1. Create backends (no dependencies)
        let (pet_actor, pet_client) = pet_actor::new(config.channel_capacity);
        let (tutor_actor, tutor_client) = tutor_actor::new(config.channel_capacity);

        // 2. Start them with injected context
        let photos = PhotoIds::new();
        let pet_handle = tokio::spawn(pet_actor.run(photos.clone()));
        let tutor_handle =
            tokio::spawn(tutor_actor.run(TutorContext::new(pet_client.clone(), photos)));

        Self {
            pets: PetFacade::new(pet_client, tutor_client.clone(), config.pet_page_size),
            tutors: TutorFacade::new(tutor_client, config.tutor_page_size),
            handles: vec![pet_handle, tutor_handle],
        }
    }

    /// Drops the facades and waits for both backends to stop.
    ///
    /// The pet backend stops once the tutor backend, which holds a pet client, is gone.
    /// Clones of the facades held elsewhere keep their backend alive.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down pet system...");

        drop(self.pets);
        drop(self.tutors);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Backend task failed");
                return Err(ShutdownError(e.to_string()));
            }
        }

        info!("Pet system shutdown complete.");
        Ok(())
    }
}
