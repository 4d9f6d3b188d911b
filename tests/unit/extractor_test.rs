//! Unit tests for the candidate extractor seam.

use laterlist::services::extractor::{CandidateExtractor, PageContext, WatchPageExtractor};

#[test]
fn test_extracts_candidate_from_watch_url() {
    let page = PageContext {
        url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        title: Some("A Video".to_string()),
        source_name: Some("A Channel".to_string()),
    };

    let candidate = WatchPageExtractor.extract(&page).unwrap();
    assert_eq!(candidate.id, "dQw4w9WgXcQ");
    assert_eq!(candidate.title, "A Video");
    assert_eq!(candidate.source_name, "A Channel");
    assert_eq!(
        candidate.thumbnail_url,
        "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
    );
    assert_eq!(candidate.page_url, page.url);
}

#[test]
fn test_id_found_among_other_query_params() {
    let page = PageContext {
        url: "https://www.youtube.com/watch?list=PL123&v=abc123&t=42s".to_string(),
        ..Default::default()
    };
    let candidate = WatchPageExtractor.extract(&page).unwrap();
    assert_eq!(candidate.id, "abc123");
}

#[test]
fn test_missing_metadata_falls_back_to_placeholders() {
    let page = PageContext {
        url: "https://www.youtube.com/watch?v=abc123".to_string(),
        title: Some("   ".to_string()),
        source_name: None,
    };
    let candidate = WatchPageExtractor.extract(&page).unwrap();
    assert_eq!(candidate.title, "Unknown Title");
    assert_eq!(candidate.source_name, "Unknown Channel");
}

#[test]
fn test_non_watch_urls_yield_nothing() {
    for url in [
        "https://www.youtube.com/",
        "https://www.youtube.com/watch",
        "https://www.youtube.com/watch?list=PL123",
        "https://www.youtube.com/watch?v=",
    ] {
        let page = PageContext {
            url: url.to_string(),
            ..Default::default()
        };
        assert!(
            WatchPageExtractor.extract(&page).is_none(),
            "expected no candidate for {}",
            url
        );
    }
}
