//! # Pet Manager
//!
//! Core of a pet/tutor registry: the rules that guard what is sent to the REST backend,
//! and an in-memory backend to send it to.
//!
//! ## Module Tour
//!
//! ### 1. Pure rules ([`cpf`], [`mask`], [`validation`])
//! Synchronous and stateless.
//! - **CPF**: normalization and check-digit validation.
//! - **Masks**: progressive CPF/phone formatting and caret placement while typing.
//! - **Request rules**: validate → sanitize for every create/update payload.
//!
//! ### 2. Records ([`model`])
//! Pets, tutors, photos and their request payloads, in the backend's wire format.
//!
//! ### 3. Backends ([`pet_actor`], [`tutor_actor`])
//! One `ResourceActor` per record type, standing in for the REST API.
//!
//! ### 4. Facades ([`facades`])
//! What the UI layer calls. A request that breaks a rule fails with a typed error and
//! never reaches the backend.
//!
//! ### 5. Orchestration ([`lifecycle`])
//! [`PetSystem`](lifecycle::PetSystem) starts and wires the backends;
//! [`SystemConfig`](lifecycle::SystemConfig) reads settings from the environment.
//!
//! ## Example
//!
//! ```rust
//! use pet_manager::lifecycle::{PetSystem, SystemConfig};
//! use pet_manager::model::TutorRequest;
//! use pet_manager::tutor_actor::TutorError;
//! use pet_manager::validation::ValidationError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = PetSystem::new(SystemConfig::default());
//!
//!     let rejected = system
//!         .tutors
//!         .create(TutorRequest::new("Ana", "11999999999").with_cpf("111.111.111-11"))
//!         .await;
//!     assert_eq!(rejected, Err(TutorError::Validation(ValidationError::InvalidCpf)));
//!
//!     let tutor = system
//!         .tutors
//!         .create(TutorRequest::new(" Ana ", "11999999999").with_cpf("529.982.247-25"))
//!         .await
//!         .unwrap();
//!     assert_eq!(tutor.cpf.as_deref(), Some("52998224725"));
//!
//!     system.shutdown().await.unwrap();
//! }
//! ```
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod cpf;
pub mod facades;
pub mod lifecycle;
pub mod mask;
pub mod model;
pub mod pet_actor;
pub mod tutor_actor;
pub mod validation;
