//! # System Lifecycle
//!
//! Starting, wiring and stopping the backends.
//!
//! ## Dependency Injection via Context
//!
//! Backends are created without dependencies and receive them in `run(context)`:
//!
//! - the pet backend gets the shared photo id sequence,
//! - the tutor backend gets a pet client as well, to check pets before linking them.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the facades** - closes the sender side of both channels
//! 2. **Backends detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the tutor backend stops first; dropping its context closes
//!    the last pet sender, and the pet backend follows
//!
//! The dependency graph is acyclic, so channel closure alone is enough.

pub mod config;
pub mod pet_system;
pub mod telemetry;

pub use config::SystemConfig;
pub use pet_system::{PetSystem, ShutdownError};
pub use telemetry::setup_tracing;
