//! # Request Rules
//!
//! Every create/update request passes through two steps before it is forwarded:
//!
//! 1. [`RequestRules::validate`] checks the rules in a fixed order and reports the first
//!    one that fails as a [`ValidationError`].
//! 2. [`RequestRules::sanitize`] trims every text field, drops optional fields that end up
//!    blank and normalizes values such as the CPF.
//!
//! [`RequestRules::prepare`] chains both. Facades call it and only talk to the backend
//! when it succeeds, so a rejected request never leaves the process.

/// Whether `value` is absent or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// The trimmed value, or `None` when absent or blank.
pub fn trimmed_or_absent(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// What kind of rule a request broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A mandatory field is absent or blank.
    Missing,
    /// A value is present but not well formed.
    Malformed,
}

/// A broken request rule. The message is shown to the end user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Nome do pet é obrigatório.")]
    PetNameRequired,

    #[error("Nome é obrigatório.")]
    TutorNameRequired,

    #[error("Telefone é obrigatório.")]
    PhoneRequired,

    #[error("CPF inválido.")]
    InvalidCpf,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::PetNameRequired | Self::TutorNameRequired | Self::PhoneRequired => {
                ValidationErrorKind::Missing
            }
            Self::InvalidCpf => ValidationErrorKind::Malformed,
        }
    }

    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::PetNameRequired | Self::TutorNameRequired => "nome",
            Self::PhoneRequired => "telefone",
            Self::InvalidCpf => "cpf",
        }
    }
}

/// Validation and sanitization of an outgoing request.
pub trait RequestRules: Sized {
    /// Checks the rules in order; `Err` carries the first failure.
    fn validate(&self) -> Result<(), ValidationError>;

    /// The cleaned-up request. Only meaningful after `validate` succeeded.
    fn sanitize(&self) -> Self;

    /// `validate`, then `sanitize`.
    fn prepare(&self) -> Result<Self, ValidationError> {
        self.validate()?;
        Ok(self.sanitize())
    }
}
