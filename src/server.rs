//! MCP server implementation
//!
//! Defines the tool router exposing SearXNG search as three MCP tools:
//! `search`, `search_images`, and `search_videos`. Dispatch is stateless;
//! the only shared state is the immutable config and the pooled HTTP client.

use anyhow::Result;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::client::SearxngClient;
use crate::config::Config;
use crate::error::{SearchError, SearchResult};
use crate::mapper::map_response;
use crate::types::Category;

/// The SearXNG MCP server
#[derive(Clone)]
pub struct SearxngMcpServer {
    client: Arc<SearxngClient>,
    max_results: usize,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Parameter Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// The search query
    #[schemars(description = "The search query string")]
    pub query: String,
    /// Result page to fetch
    #[schemars(description = "Page number for pagination, starting at 1 (default: 1)")]
    pub page: Option<u32>,
}

impl SearchParams {
    /// Validate and normalize: trimmed non-empty query, page >= 1
    fn validate(&self) -> SearchResult<(&str, u32)> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(SearchError::Validation(
                "query must be a non-empty string".to_string(),
            ));
        }
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(SearchError::Validation(
                "page must be a positive integer".to_string(),
            ));
        }
        Ok((query, page))
    }
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl SearxngMcpServer {
    pub fn new(config: &Config) -> Result<Self> {
        let client = SearxngClient::new(&config.searxng)?;

        Ok(Self {
            client: Arc::new(client),
            max_results: config.searxng.max_results,
            tool_router: Self::tool_router(),
        })
    }

    /// Validate, query the backend, map, and serialize one tool call
    ///
    /// Public for direct API usage without a transport.
    pub async fn run_search(
        &self,
        params: &SearchParams,
        category: Category,
    ) -> Result<CallToolResult, McpError> {
        let (query, page) = params.validate()?;

        tracing::info!(query, page, category = category.searxng_param(), "search request");

        let raw = self.client.search(query, page, category).await.map_err(|e| {
            tracing::error!(query, error = %e, "search failed");
            McpError::from(e)
        })?;

        let response = map_response(raw, category, page, self.max_results);
        tracing::info!(query, count = response.results.len(), "search completed");

        let json = serde_json::to_string_pretty(&response)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(
        description = "Search the web using the SearXNG metasearch engine. Returns titles, URLs, and snippets in rank order."
    )]
    async fn search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(&params, Category::Text).await
    }

    #[tool(
        description = "Search for images using the SearXNG metasearch engine. Every result includes a thumbnail or image URL."
    )]
    async fn search_images(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(&params, Category::Image).await
    }

    #[tool(
        description = "Search for videos using the SearXNG metasearch engine. Every result includes a thumbnail URL."
    )]
    async fn search_videos(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run_search(&params, Category::Video).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for SearxngMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "SearXNG MCP Server - search the web, images, and videos through a \
                 self-hosted SearXNG metasearch instance. Results preserve the \
                 backend's rank order and include titles, URLs, and snippets. \
                 No API keys required."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
