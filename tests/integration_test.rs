use pet_manager::lifecycle::{PetSystem, SystemConfig};
use pet_manager::model::{
    PetFilter, PetId, PetRequest, PhotoUpload, TutorFilter, TutorRequest,
};
use pet_manager::pet_actor::PetError;
use pet_manager::tutor_actor::TutorError;
use pet_manager::validation::ValidationError;
use resource_framework::ResourceFacade;

/// Full end-to-end integration test with both real backends.
#[tokio::test]
async fn test_full_pet_system_integration() {
    let system = PetSystem::new(SystemConfig::default());

    // Create a tutor; the payload is sanitized on the way
    let tutor = system
        .tutors
        .create(
            TutorRequest::new("  João  ", "  11 99999-9999  ")
                .with_email("   ")
                .with_endereco("  Rua A  ")
                .with_cpf("529.982.247-25"),
        )
        .await
        .expect("Failed to create tutor");
    assert_eq!(tutor.nome, "João");
    assert_eq!(tutor.telefone, "11 99999-9999");
    assert_eq!(tutor.email, None);
    assert_eq!(tutor.endereco.as_deref(), Some("Rua A"));
    assert_eq!(tutor.cpf.as_deref(), Some("52998224725"));

    // Create a pet
    let pet = system
        .pets
        .create(PetRequest::new("  Rex  ").with_raca("   ").with_idade(3))
        .await
        .expect("Failed to create pet");
    assert_eq!(pet.nome, "Rex");
    assert_eq!(pet.raca, None);
    assert_eq!(pet.idade, Some(3));

    // Link them
    system
        .tutors
        .link_pet(tutor.id, pet.id)
        .await
        .expect("Failed to link pet");

    let reloaded = system
        .tutors
        .find_by_id(tutor.id)
        .await
        .expect("Failed to get tutor")
        .expect("Tutor not found");
    assert_eq!(reloaded.pets, vec![pet.clone()]);

    // Linking twice is refused
    let twice = system.tutors.link_pet(tutor.id, pet.id).await;
    assert_eq!(
        twice,
        Err(TutorError::AlreadyLinked {
            tutor: tutor.id,
            pet: pet.id
        })
    );

    // Unlink, then unlink again
    system.tutors.unlink_pet(tutor.id, pet.id).await.unwrap();
    assert!(matches!(
        system.tutors.unlink_pet(tutor.id, pet.id).await,
        Err(TutorError::NotLinked { .. })
    ));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_rejected_requests_leave_no_trace() {
    let system = PetSystem::new(SystemConfig::default());

    let result = system
        .tutors
        .create(TutorRequest::new("   ", "11999999999"))
        .await;
    assert_eq!(
        result,
        Err(TutorError::Validation(ValidationError::TutorNameRequired))
    );

    let result = system
        .tutors
        .create(TutorRequest::new("Ana", "11999999999").with_cpf("529.982.247-24"))
        .await;
    assert_eq!(
        result,
        Err(TutorError::Validation(ValidationError::InvalidCpf))
    );

    let result = system.pets.create(PetRequest::new("\t")).await;
    assert_eq!(
        result,
        Err(PetError::Validation(ValidationError::PetNameRequired))
    );

    // Nothing was stored, and the first accepted records still get id 1.
    let tutors = system.tutors.first_page(TutorFilter::default()).await.unwrap();
    assert_eq!(tutors.total, 0);

    let pet = system.pets.create(PetRequest::new("Mia")).await.unwrap();
    assert_eq!(pet.id, PetId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_validates_and_keeps_links() {
    let system = PetSystem::new(SystemConfig::default());

    let tutor = system
        .tutors
        .create(TutorRequest::new("Ana", "11999999999"))
        .await
        .unwrap();
    let pet = system.pets.create(PetRequest::new("Rex")).await.unwrap();
    system.tutors.link_pet(tutor.id, pet.id).await.unwrap();

    let rejected = system
        .tutors
        .update(tutor.id, TutorRequest::new("Ana", " "))
        .await;
    assert_eq!(
        rejected,
        Err(TutorError::Validation(ValidationError::PhoneRequired))
    );

    let updated = system
        .tutors
        .update(
            tutor.id,
            TutorRequest::new(" Ana Maria ", "11 3333-4444").with_cpf("123.456.789-09"),
        )
        .await
        .unwrap();
    assert_eq!(updated.nome, "Ana Maria");
    assert_eq!(updated.cpf.as_deref(), Some("12345678909"));
    assert_eq!(updated.pets.len(), 1);

    let missing = system
        .pets
        .update(PetId(99), PetRequest::new("Ghost"))
        .await;
    assert_eq!(missing, Err(PetError::NotFound("99".to_string())));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_paging_and_filters() {
    let config = SystemConfig {
        pet_page_size: 2,
        ..SystemConfig::default()
    };
    let system = PetSystem::new(config);

    for (nome, raca) in [
        ("Rex", "Pastor Alemão"),
        ("Mia", "Siamês"),
        ("Thor", "Pastor Belga"),
        ("Bob", "Poodle"),
        ("Rexinho", "Vira-lata"),
    ] {
        system
            .pets
            .create(PetRequest::new(nome).with_raca(raca))
            .await
            .unwrap();
    }

    let first = system.pets.first_page(PetFilter::default()).await.unwrap();
    assert_eq!(first.size, 2);
    assert_eq!(first.total, 5);
    assert_eq!(first.page_count, 3);
    assert!(first.has_next());

    let last = system
        .pets
        .find_all(2, 2, PetFilter::default())
        .await
        .unwrap();
    assert_eq!(last.content.len(), 1);
    assert_eq!(last.content[0].nome, "Rexinho");
    assert!(!last.has_next());

    let pastores = system
        .pets
        .find_all(0, 10, PetFilter::by_raca("pastor"))
        .await
        .unwrap();
    let names: Vec<&str> = pastores.content.iter().map(|p| p.nome.as_str()).collect();
    assert_eq!(names, vec!["Rex", "Thor"]);

    let rex = system
        .pets
        .find_all(0, 10, PetFilter::by_nome("REX"))
        .await
        .unwrap();
    assert_eq!(rex.total, 2);

    let beyond = system
        .pets
        .find_all(7, 2, PetFilter::default())
        .await
        .unwrap();
    assert!(beyond.content.is_empty());
    assert_eq!(beyond.total, 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_photos_and_deletion() {
    let system = PetSystem::new(SystemConfig::default());

    let pet = system.pets.create(PetRequest::new("Rex")).await.unwrap();
    let tutor = system
        .tutors
        .create(TutorRequest::new("Ana", "11999999999"))
        .await
        .unwrap();

    let pet_photo = system
        .pets
        .upload_photo(pet.id, PhotoUpload::new("rex.png", "image/png", vec![1, 2, 3]))
        .await
        .unwrap();
    let tutor_photo = system
        .tutors
        .upload_photo(tutor.id, PhotoUpload::new("ana.jpg", "image/jpeg", vec![4]))
        .await
        .unwrap();
    // One id sequence for every photo.
    assert_ne!(pet_photo.id, tutor_photo.id);
    assert_eq!(pet_photo.nome, "rex.png");
    assert_eq!(tutor_photo.content_type, "image/jpeg");

    let empty = system
        .pets
        .upload_photo(pet.id, PhotoUpload::new("empty.png", "image/png", Vec::new()))
        .await;
    assert_eq!(empty, Err(PetError::EmptyPhoto));

    let wrong = system.pets.delete_photo(pet.id, tutor_photo.id).await;
    assert!(matches!(wrong, Err(PetError::PhotoNotFound { .. })));

    system
        .pets
        .delete_photo(pet.id, pet_photo.id)
        .await
        .unwrap();
    let stored = system.pets.find_by_id(pet.id).await.unwrap().unwrap();
    assert!(stored.foto.is_none());

    system.pets.delete(pet.id).await.unwrap();
    assert_eq!(system.pets.find_by_id(pet.id).await, Ok(None));
    assert_eq!(
        system.pets.delete(pet.id).await,
        Err(PetError::NotFound(pet.id.to_string()))
    );

    // A deleted pet can no longer be linked.
    assert_eq!(
        system.tutors.link_pet(tutor.id, pet.id).await,
        Err(TutorError::PetNotFound(pet.id))
    );

    system.shutdown().await.unwrap();
}

/// Tutors always show their pets as the pet backend has them now.
#[tokio::test]
async fn test_links_follow_pet_changes() {
    let system = PetSystem::new(SystemConfig::default());

    let tutor = system
        .tutors
        .create(TutorRequest::new("Ana", "11999999999"))
        .await
        .unwrap();
    let rex = system.pets.create(PetRequest::new("Rex")).await.unwrap();
    let mia = system.pets.create(PetRequest::new("Mia")).await.unwrap();
    system.tutors.link_pet(tutor.id, rex.id).await.unwrap();
    system.tutors.link_pet(tutor.id, mia.id).await.unwrap();

    system
        .pets
        .update(mia.id, PetRequest::new("Mia Renamed"))
        .await
        .unwrap();
    system.pets.delete(rex.id).await.unwrap();

    let reloaded = system.tutors.find_by_id(tutor.id).await.unwrap().unwrap();
    let pets: Vec<(PetId, &str)> = reloaded
        .pets
        .iter()
        .map(|pet| (pet.id, pet.nome.as_str()))
        .collect();
    assert_eq!(pets, vec![(mia.id, "Mia Renamed")]);

    let listed = system
        .tutors
        .first_page(TutorFilter::default())
        .await
        .unwrap();
    assert_eq!(listed.content[0].pets, reloaded.pets);

    // The link to the deleted pet is gone for good.
    assert!(matches!(
        system.tutors.unlink_pet(tutor.id, rex.id).await,
        Err(TutorError::NotLinked { .. })
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_pet_details_list_its_tutors() {
    let system = PetSystem::new(SystemConfig {
        pet_page_size: 1,
        ..SystemConfig::default()
    });

    let ana = system
        .tutors
        .create(TutorRequest::new("Ana", "11999999999"))
        .await
        .unwrap();
    let bia = system
        .tutors
        .create(TutorRequest::new("Bia", "1133334444"))
        .await
        .unwrap();
    system
        .tutors
        .create(TutorRequest::new("Caio", "1122223333"))
        .await
        .unwrap();

    let rex = system.pets.create(PetRequest::new("Rex")).await.unwrap();
    let mia = system.pets.create(PetRequest::new("Mia")).await.unwrap();
    system.tutors.link_pet(ana.id, rex.id).await.unwrap();
    system.tutors.link_pet(bia.id, rex.id).await.unwrap();

    let details = system.pets.find_details(rex.id).await.unwrap().unwrap();
    assert_eq!(details.pet, rex);
    let owners: Vec<&str> = details.tutores.iter().map(|t| t.nome.as_str()).collect();
    assert_eq!(owners, vec!["Ana", "Bia"]);

    let alone = system.pets.find_details(mia.id).await.unwrap().unwrap();
    assert!(alone.tutores.is_empty());

    assert_eq!(system.pets.find_details(PetId(99)).await, Ok(None));

    system.tutors.unlink_pet(bia.id, rex.id).await.unwrap();
    let details = system.pets.find_details(rex.id).await.unwrap().unwrap();
    assert_eq!(details.tutores.len(), 1);
    assert_eq!(details.tutores[0].id, ana.id);

    system.shutdown().await.unwrap();
}
