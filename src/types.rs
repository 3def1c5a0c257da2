//! Common types for search results
//!
//! These types form the tool-facing result schema. They are mapped from the
//! SearXNG wire format by the [`crate::mapper`] module and serialized as JSON
//! into tool responses.

use serde::{Deserialize, Serialize};

/// Search category, mapped to the SearXNG `categories` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Text,
    Image,
    Video,
}

impl Category {
    /// Value sent as the `categories` parameter to SearXNG
    pub fn searxng_param(&self) -> &'static str {
        match self {
            Category::Text => "general",
            Category::Image => "images",
            Category::Video => "videos",
        }
    }

    /// Whether results in this category must carry a media/thumbnail URL
    pub fn requires_media(&self) -> bool {
        matches!(self, Category::Image | Category::Video)
    }
}

/// A single search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result
    pub title: String,
    /// The URL of the result page
    pub url: String,
    /// A description or snippet of the result
    pub snippet: String,
    /// Thumbnail or media URL (image/video results only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// When the content was published (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    /// The engine that produced this result
    pub engine_source: String,
}

/// A collection of search results in backend rank order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The search results
    pub results: Vec<SearchResult>,
    /// The page that was requested
    pub page: u32,
    /// Total number of results reported by the backend (may be estimated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_estimated: Option<u64>,
    /// Related search suggestions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}
