//! Facades: the API the UI layer calls.
//!
//! Each facade wraps a `ResourceClient` and enforces validate → sanitize → forward on
//! create and update. Reads, deletes and lists come from
//! [`ResourceFacade`](resource_framework::ResourceFacade).

pub mod pet_facade;
pub mod tutor_facade;

pub use pet_facade::PetFacade;
pub use tutor_facade::TutorFacade;
