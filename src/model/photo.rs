use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Type-safe identifier for Photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(pub u32);

impl From<u32> for PhotoId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A photo attached to a pet or a tutor, as the backend describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: PhotoId,
    pub nome: String,
    pub content_type: String,
    pub url: String,
}

/// A file picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

// Payload bytes stay out of debug logs.
impl std::fmt::Debug for PhotoUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Photo id sequence shared by every backend that stores photos.
#[derive(Debug, Clone, Default)]
pub struct PhotoIds(Arc<AtomicU32>);

impl PhotoIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence whose last handed out id is `last`.
    #[cfg(test)]
    pub(crate) fn after(last: u32) -> Self {
        Self(Arc::new(AtomicU32::new(last)))
    }

    /// Next id, starting at 1. `None` once `u32::MAX` has been handed out.
    pub fn next(&self) -> Option<PhotoId> {
        self.0
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .ok()
            .and_then(|last| last.checked_add(1))
            .map(PhotoId)
    }
}

impl Photo {
    /// Stores `upload` under `/v1/{collection}/{owner}/fotos/{id}`.
    pub fn stored(id: PhotoId, collection: &str, owner: impl Display, upload: PhotoUpload) -> Self {
        Self {
            id,
            url: format!("/v1/{collection}/{owner}/fotos/{id}"),
            nome: upload.file_name,
            content_type: upload.content_type,
        }
    }
}
