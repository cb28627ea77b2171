use pet_manager::model::{Pet, PetId, PetRequest, PhotoIds, TutorRequest};
use pet_manager::tutor_actor::{self, TutorAction, TutorActionResult, TutorContext};
use resource_framework::mock::MockClient;
use resource_framework::FrameworkError;

/// Real Tutor backend with a mocked Pet backend.
///
/// Exercises the link logic in `handle_action` while isolating it from the pet store.
#[tokio::test]
async fn test_tutor_backend_with_mocked_pets() {
    let mut pet_mock = MockClient::<Pet>::new();

    // LinkPet asks the pet backend for the pet
    let rex = Pet::new(PetId(7), PetRequest::new("Rex"));
    pet_mock.expect_get(PetId(7)).return_ok(Some(rex.clone()));
    pet_mock.expect_get(PetId(8)).return_ok(None);

    // Reading the tutor asks again, and sees the pet as it is now
    let renamed = Pet::new(PetId(7), PetRequest::new("Rex II"));
    pet_mock.expect_get(PetId(7)).return_ok(Some(renamed.clone()));

    let (tutor_actor, tutor_client) = tutor_actor::new(10);
    let actor_handle = tokio::spawn(
        tutor_actor.run(TutorContext::new(pet_mock.client(), PhotoIds::new())),
    );

    let tutor = tutor_client
        .create(TutorRequest::new("Ana", "11999999999"))
        .await
        .expect("Failed to create tutor");

    let linked = tutor_client
        .perform_action(tutor.id, TutorAction::LinkPet(PetId(7)))
        .await
        .expect("Failed to link pet");
    assert_eq!(linked, TutorActionResult::LinkPet(()));

    let unknown = tutor_client
        .perform_action(tutor.id, TutorAction::LinkPet(PetId(8)))
        .await;
    assert!(matches!(unknown, Err(FrameworkError::Rejected(_))));

    let stored = tutor_client.get(tutor.id).await.unwrap().unwrap();
    assert_eq!(stored.pets, vec![renamed]);

    pet_mock.verify();

    drop(tutor_client);
    actor_handle.await.unwrap();
}

/// The pet backend is never asked when the pet is already linked.
#[tokio::test]
async fn test_duplicate_link_skips_pet_lookup() {
    let mut pet_mock = MockClient::<Pet>::new();
    pet_mock
        .expect_get(PetId(1))
        .return_ok(Some(Pet::new(PetId(1), PetRequest::new("Mia"))));

    let (tutor_actor, tutor_client) = tutor_actor::new(10);
    tokio::spawn(tutor_actor.run(TutorContext::new(pet_mock.client(), PhotoIds::new())));

    let tutor = tutor_client
        .create(TutorRequest::new("Bia", "1133334444"))
        .await
        .unwrap();
    tutor_client
        .perform_action(tutor.id, TutorAction::LinkPet(PetId(1)))
        .await
        .unwrap();

    let again = tutor_client
        .perform_action(tutor.id, TutorAction::LinkPet(PetId(1)))
        .await
        .unwrap_err();
    assert_eq!(
        again.to_string(),
        "Rejected: Pet 1 is already linked to tutor 1"
    );

    // Exactly one lookup was made.
    pet_mock.verify();
}

/// A read fails when the pet backend cannot be asked, and the stored links survive.
#[tokio::test]
async fn test_read_reports_pet_backend_failure() {
    let mut pet_mock = MockClient::<Pet>::new();
    let mia = Pet::new(PetId(2), PetRequest::new("Mia"));
    pet_mock.expect_get(PetId(2)).return_ok(Some(mia.clone()));
    pet_mock
        .expect_get(PetId(2))
        .return_err(FrameworkError::BackendClosed);
    pet_mock.expect_get(PetId(2)).return_ok(Some(mia.clone()));

    let (tutor_actor, tutor_client) = tutor_actor::new(10);
    tokio::spawn(tutor_actor.run(TutorContext::new(pet_mock.client(), PhotoIds::new())));

    let tutor = tutor_client
        .create(TutorRequest::new("Caio", "1133334444"))
        .await
        .unwrap();
    tutor_client
        .perform_action(tutor.id, TutorAction::LinkPet(PetId(2)))
        .await
        .unwrap();

    let failed = tutor_client.get(tutor.id).await.unwrap_err();
    assert_eq!(failed.to_string(), "Rejected: Pet lookup failed: Backend closed");

    let stored = tutor_client.get(tutor.id).await.unwrap().unwrap();
    assert_eq!(stored.pets, vec![mia]);

    pet_mock.verify();
}
