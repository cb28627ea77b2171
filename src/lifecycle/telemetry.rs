//! # Observability
//!
//! [`setup_tracing`] installs a compact `tracing` subscriber filtered by `RUST_LOG`.
//!
//! Module paths are hidden (`with_target(false)`); backend events carry an
//! `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Backend started entity_type="Pet"
//! INFO Backend started entity_type="Tutor"
//! WARN create: Request rejected before sending field="nome" error=Nome é obrigatório.
//! INFO Created entity_type="Tutor" id=1 size=1
//! INFO Created entity_type="Pet" id=1 size=1
//! INFO link_pet{tutor_id=TutorId(1) pet_id=PetId(1)}: Pet linked
//! ```
//!
//! With `RUST_LOG=debug` the facades also log each request payload once, on entry.

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
