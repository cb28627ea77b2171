//! # Pet Manager Demo
//!
//! Walks through the system once:
//! 1.  Masks some typed input.
//! 2.  Shows a request rejected before it reaches the backend.
//! 3.  Creates a tutor and a pet, links them, loads the pet's tutors and lists the tutors.

use pet_manager::lifecycle::{setup_tracing, PetSystem, SystemConfig};
use pet_manager::mask::{mask_for_display, remask, MaskKind};
use pet_manager::model::{PetRequest, PhotoUpload, TutorFilter, TutorRequest};
use resource_framework::ResourceFacade;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = SystemConfig::from_env();
    info!(?config, "Starting demo");
    let system = PetSystem::new(config);

    // Keystrokes: a digit typed after "529." in "529.982".
    let edit = remask("529.1982", 5, MaskKind::Cpf);
    info!(value = %edit.value, caret = edit.caret, "CPF input re-masked");
    info!(
        phone = %mask_for_display(Some("11999999999"), MaskKind::Phone),
        "Stored phone for display"
    );

    // Blank name: rejected with zero backend calls.
    if let Err(e) = system
        .tutors
        .create(TutorRequest::new("   ", "11999999999"))
        .await
    {
        info!(error = %e, "Rejected as expected");
    }

    let span = tracing::info_span!("registration");
    let (tutor, pet) = async {
        let tutor = system
            .tutors
            .create(
                TutorRequest::new("  João  ", "  11 99999-9999  ")
                    .with_email("   ")
                    .with_endereco("  Rua A  ")
                    .with_cpf("529.982.247-25"),
            )
            .await?;
        info!(tutor_id = %tutor.id, cpf = ?tutor.cpf, "Tutor created");

        let pet = system
            .pets
            .create(PetRequest::new("  Rex  ").with_raca("   ").with_idade(3))
            .await?;
        info!(pet_id = %pet.id, "Pet created");

        Ok::<_, Box<dyn std::error::Error>>((tutor, pet))
    }
    .instrument(span)
    .await?;

    let photo = system
        .pets
        .upload_photo(pet.id, PhotoUpload::new("rex.png", "image/png", vec![0x89, 0x50]))
        .await?;
    info!(url = %photo.url, "Photo uploaded");

    match system.tutors.link_pet(tutor.id, pet.id).await {
        Ok(()) => info!("Pet linked to tutor"),
        Err(e) => error!(error = %e, "Linking failed"),
    }

    if let Some(details) = system.pets.find_details(pet.id).await? {
        info!(tutores = details.tutores.len(), "Pet details loaded");
    }

    let page = system.tutors.first_page(TutorFilter::by_nome("joão")).await?;
    info!(total = page.total, page_count = page.page_count, "Tutors listed");

    if let Some(stored) = system.tutors.find_by_id(tutor.id).await? {
        info!(pets = stored.pets.len(), "Tutor reloaded");
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
