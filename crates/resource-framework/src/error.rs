//! # Framework Errors
//!
//! Errors raised while talking to a resource backend. They are independent of any
//! particular resource; facades translate them into their own error enums.

/// Errors that can occur between a client and its backend.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Backend closed")]
    BackendClosed,
    #[error("Backend dropped response channel")]
    ResponseDropped,
    /// Every `u32` id has been handed out.
    #[error("No ids left")]
    IdsExhausted,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps a resource hook error.
    pub fn rejected(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Rejected(Box::new(error))
    }
}
