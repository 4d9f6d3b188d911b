//! Candidate extraction seam.
//!
//! Page scraping is fragile, markup-dependent glue, so it sits behind a narrow
//! contract: given a page context, produce a save candidate or nothing. The
//! store never sees extraction internals — a failed extraction is `None`, and
//! the page-level UI decides how to surface that.

use crate::types::video::VideoCandidate;

/// What the page agent knows about the current page.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub url: String,
    pub title: Option<String>,
    pub source_name: Option<String>,
}

/// Narrow extraction contract, swappable and mockable independently of the store.
pub trait CandidateExtractor {
    fn extract(&self, page: &PageContext) -> Option<VideoCandidate>;
}

/// Extractor for watch-page URLs carrying the video id in the `v` query
/// parameter. Title and source name fall back to placeholder strings when the
/// page gave us nothing, matching what the list view expects to render.
pub struct WatchPageExtractor;

impl WatchPageExtractor {
    fn video_id_from_url(url: &str) -> Option<String> {
        let query = url.split_once('?')?.1;
        // Anchor fragments are not part of the query
        let query = query.split('#').next().unwrap_or(query);
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "v")
            .map(|(_, value)| value.to_string())
            .filter(|id| !id.is_empty())
    }
}

impl CandidateExtractor for WatchPageExtractor {
    fn extract(&self, page: &PageContext) -> Option<VideoCandidate> {
        let id = Self::video_id_from_url(&page.url)?;

        let title = page
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Unknown Title")
            .to_string();
        let source_name = page
            .source_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown Channel")
            .to_string();

        Some(VideoCandidate {
            thumbnail_url: format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", id),
            page_url: page.url.clone(),
            id,
            title,
            source_name,
        })
    }
}
