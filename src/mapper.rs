//! Response mapping
//!
//! Converts the SearXNG wire format into the tool-facing [`SearchResponse`]
//! schema. Invalid entries are dropped rather than failing the whole call:
//! a result must carry a non-empty title and an absolute URL, image/video
//! results must carry a media URL, and general results carrying an
//! `img_src` (image hits bleeding into mixed-engine instances) are
//! skipped. Backend rank order is preserved and the list is truncated to
//! the configured maximum.

use url::Url;

use crate::client::{SearxngResponse, SearxngResult};
use crate::types::{Category, SearchResponse, SearchResult};

/// Related suggestions carried through per response
const MAX_SUGGESTIONS: usize = 5;

/// Map a raw backend response into the tool result schema
pub fn map_response(
    raw: SearxngResponse,
    category: Category,
    page: u32,
    max_results: usize,
) -> SearchResponse {
    let results = raw
        .results
        .into_iter()
        .filter_map(|r| map_result(r, category))
        .take(max_results)
        .collect();

    let mut suggestions = raw.suggestions;
    suggestions.truncate(MAX_SUGGESTIONS);

    SearchResponse {
        results,
        page,
        total_estimated: raw.number_of_results.filter(|&n| n > 0),
        suggestions,
    }
}

fn map_result(raw: SearxngResult, category: Category) -> Option<SearchResult> {
    // Relative or unparseable URLs are as useless to the caller as none
    if raw.title.trim().is_empty() || Url::parse(raw.url.trim()).is_err() {
        return None;
    }

    let thumbnail_url = if category.requires_media() {
        // Entries without a usable media URL are dropped, not errored
        Some(media_url(&raw)?)
    } else {
        // Image-only hits bleed into general results on some instances
        if raw.img_src.as_deref().is_some_and(|s| !s.is_empty()) {
            return None;
        }
        None
    };

    Some(SearchResult {
        title: raw.title,
        url: raw.url,
        snippet: raw.content.unwrap_or_default(),
        thumbnail_url,
        published: raw.published_date,
        engine_source: raw.engine.unwrap_or_default(),
    })
}

/// Best available media URL for a result, in SearXNG preference order
fn media_url(raw: &SearxngResult) -> Option<String> {
    [&raw.img_src, &raw.thumbnail_src, &raw.thumbnail]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_result(title: &str, url: &str) -> SearxngResult {
        serde_json::from_value(serde_json::json!({
            "title": title,
            "url": url,
        }))
        .unwrap()
    }

    fn wire_response(results: Vec<SearxngResult>) -> SearxngResponse {
        SearxngResponse {
            results,
            number_of_results: None,
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn preserves_backend_order() {
        let raw = wire_response(vec![
            wire_result("First", "https://a.example"),
            wire_result("Second", "https://b.example"),
            wire_result("Third", "https://c.example"),
        ]);

        let mapped = map_response(raw, Category::Text, 1, 10);
        let titles: Vec<&str> = mapped.results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn truncates_to_max_results() {
        let results = (0..20)
            .map(|i| wire_result(&format!("Result {i}"), &format!("https://example.com/{i}")))
            .collect();

        let mapped = map_response(wire_response(results), Category::Text, 1, 5);
        assert_eq!(mapped.results.len(), 5);
        assert_eq!(mapped.results[0].title, "Result 0");
    }

    #[test]
    fn drops_entries_missing_url_or_title() {
        let raw = wire_response(vec![
            wire_result("", "https://no-title.example"),
            wire_result("No url", ""),
            wire_result("Kept", "https://kept.example"),
        ]);

        let mapped = map_response(raw, Category::Text, 1, 10);
        assert_eq!(mapped.results.len(), 1);
        assert_eq!(mapped.results[0].title, "Kept");
    }

    #[test]
    fn drops_entries_with_non_absolute_urls() {
        let raw = wire_response(vec![
            wire_result("Relative", "/relative/path"),
            wire_result("Garbage", "not a uri at all"),
            wire_result("Absolute", "https://kept.example/page"),
        ]);

        let mapped = map_response(raw, Category::Text, 1, 10);
        assert_eq!(mapped.results.len(), 1);
        assert_eq!(mapped.results[0].url, "https://kept.example/page");
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let mapped = map_response(
            wire_response(vec![wire_result("Bare", "https://bare.example")]),
            Category::Text,
            1,
            10,
        );

        let result = &mapped.results[0];
        assert_eq!(result.snippet, "");
        assert_eq!(result.engine_source, "");
        assert!(result.thumbnail_url.is_none());
        assert!(result.published.is_none());
    }

    #[test]
    fn image_results_require_media_url() {
        let with_media: SearxngResult = serde_json::from_value(serde_json::json!({
            "title": "Logo",
            "url": "https://page.example",
            "img_src": "https://page.example/logo.png",
        }))
        .unwrap();
        let without_media = wire_result("No image", "https://page.example/other");

        let mapped = map_response(
            wire_response(vec![with_media, without_media]),
            Category::Image,
            1,
            10,
        );

        assert_eq!(mapped.results.len(), 1);
        assert_eq!(
            mapped.results[0].thumbnail_url.as_deref(),
            Some("https://page.example/logo.png")
        );
    }

    #[test]
    fn video_results_fall_back_to_thumbnail() {
        let video: SearxngResult = serde_json::from_value(serde_json::json!({
            "title": "Tutorial",
            "url": "https://videos.example/1",
            "thumbnail": "https://videos.example/1/thumb.jpg",
        }))
        .unwrap();

        let mapped = map_response(wire_response(vec![video]), Category::Video, 1, 10);
        assert_eq!(mapped.results.len(), 1);
        assert_eq!(
            mapped.results[0].thumbnail_url.as_deref(),
            Some("https://videos.example/1/thumb.jpg")
        );
    }

    #[test]
    fn text_results_skip_image_only_hits() {
        let image_hit: SearxngResult = serde_json::from_value(serde_json::json!({
            "title": "An image",
            "url": "https://images.example/pic",
            "img_src": "https://images.example/pic.jpg",
        }))
        .unwrap();
        let page_hit = wire_result("A page", "https://pages.example");

        let mapped = map_response(
            wire_response(vec![image_hit, page_hit]),
            Category::Text,
            1,
            10,
        );

        assert_eq!(mapped.results.len(), 1);
        assert_eq!(mapped.results[0].title, "A page");
    }

    #[test]
    fn zero_total_becomes_none() {
        let mut raw = wire_response(vec![]);
        raw.number_of_results = Some(0);
        let mapped = map_response(raw, Category::Text, 1, 10);
        assert!(mapped.total_estimated.is_none());
    }

    #[test]
    fn suggestions_are_capped() {
        let mut raw = wire_response(vec![]);
        raw.suggestions = (0..10).map(|i| format!("suggestion {i}")).collect();
        let mapped = map_response(raw, Category::Text, 2, 10);
        assert_eq!(mapped.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(mapped.page, 2);
    }
}
