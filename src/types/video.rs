use serde::{Deserialize, Serialize};

/// Display metadata extracted from the host page, before timestamps are assigned.
///
/// Field names serialize in camelCase to match the wire format used by the
/// page agent (`{id, title, sourceName, thumbnailUrl, pageUrl}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCandidate {
    pub id: String,
    pub title: String,
    pub source_name: String,
    pub thumbnail_url: String,
    pub page_url: String,
}

/// A saved video record with expiration metadata.
///
/// `saved_at` and `expires_at` are milliseconds since the UNIX epoch.
/// Invariant: `expires_at = saved_at + expiration_period` at the time of the
/// write that created or renewed the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedVideo {
    pub id: String,
    pub title: String,
    pub source_name: String,
    pub thumbnail_url: String,
    pub page_url: String,
    pub saved_at: i64,
    pub expires_at: i64,
}

impl SavedVideo {
    /// Builds a record from a candidate plus the timestamps of this save.
    pub fn from_candidate(candidate: &VideoCandidate, saved_at: i64, expires_at: i64) -> Self {
        Self {
            id: candidate.id.clone(),
            title: candidate.title.clone(),
            source_name: candidate.source_name.clone(),
            thumbnail_url: candidate.thumbnail_url.clone(),
            page_url: candidate.page_url.clone(),
            saved_at,
            expires_at,
        }
    }
}
