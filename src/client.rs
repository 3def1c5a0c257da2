//! SearXNG HTTP client
//!
//! Issues search queries against a SearXNG instance's JSON API and
//! classifies failures into the [`SearchError`] taxonomy.
//! See: https://docs.searxng.org/dev/search_api.html

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::config::SearxngConfig;
use crate::error::{SearchError, SearchResult};
use crate::types::Category;

const USER_AGENT: &str = concat!("searxng-mcp/", env!("CARGO_PKG_VERSION"));

/// How much of an error body to keep in error messages
const BODY_EXCERPT_LEN: usize = 256;

/// HTTP client for the SearXNG search API
///
/// Holds a pooled [`reqwest::Client`]; construct once at startup and share.
/// Each call is a single attempt, no retries.
pub struct SearxngClient {
    client: Client,
    base_url: String,
    timeout_seconds: u64,
}

// SearXNG wire format. Fields default so a sparse or partially populated
// result never fails deserialization of the whole response.
#[derive(Debug, Deserialize)]
pub struct SearxngResponse {
    #[serde(default)]
    pub results: Vec<SearxngResult>,
    #[serde(default)]
    pub number_of_results: Option<u64>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearxngResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default, rename = "publishedDate")]
    pub published_date: Option<String>,
    #[serde(default)]
    pub img_src: Option<String>,
    #[serde(default)]
    pub thumbnail_src: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl SearxngClient {
    /// Build a client from validated configuration
    pub fn new(config: &SearxngConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// Query SearXNG for one page of results in the given category
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        category: Category,
    ) -> SearchResult<SearxngResponse> {
        let url = format!("{}/search", self.base_url);
        let page_str = page.to_string();
        let params = [
            ("q", query),
            ("format", "json"),
            ("categories", category.searxng_param()),
            ("pageno", &page_str),
        ];

        tracing::debug!(query, page, category = category.searxng_param(), "querying SearXNG");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Backend {
                status: status.as_u16(),
                body_excerpt: excerpt(&body),
            });
        }

        response
            .json::<SearxngResponse>()
            .await
            .map_err(|e| if e.is_timeout() { self.timeout() } else { SearchError::Parse(e) })
    }

    fn classify(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            self.timeout()
        } else {
            SearchError::Http(err)
        }
    }

    fn timeout(&self) -> SearchError {
        SearchError::Timeout {
            seconds: self.timeout_seconds,
        }
    }
}

fn excerpt(body: &str) -> String {
    if body.len() <= BODY_EXCERPT_LEN {
        return body.to_string();
    }
    let mut end = BODY_EXCERPT_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
