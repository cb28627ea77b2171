//! Records and request payloads exchanged with the backend.
//!
//! Field names follow the backend's wire format (`nome`, `raca`, `telefone`, ...).

pub mod pet;
pub mod photo;
pub mod tutor;

pub use pet::*;
pub use photo::*;
pub use tutor::*;

/// Case-insensitive substring match. A missing or blank `needle` accepts anything;
/// a missing `haystack` accepts only that.
fn contains_ignore_case(haystack: Option<&str>, needle: Option<&str>) -> bool {
    let Some(needle) = needle.map(str::trim).filter(|n| !n.is_empty()) else {
        return true;
    };
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// Debug stand-in for personal data.
struct Redacted;

impl std::fmt::Debug for Redacted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

fn redacted<T>(value: &Option<T>) -> Option<Redacted> {
    value.as_ref().map(|_| Redacted)
}
