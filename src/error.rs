//! Error types for the search adapter
//!
//! Search failures are recoverable: they are converted into MCP tool errors
//! and returned to the caller, never crashing the transport. Configuration
//! errors are fatal and abort startup with a non-zero exit.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur while handling a search tool call
#[derive(Error, Debug)]
pub enum SearchError {
    /// Invalid caller input, rejected before any backend request
    #[error("invalid parameters: {0}")]
    Validation(String),

    /// The backend returned a non-2xx status
    #[error("SearXNG returned HTTP {status}: {body_excerpt}")]
    Backend {
        /// HTTP status code from the backend
        status: u16,
        /// First bytes of the response body
        body_excerpt: String,
    },

    /// The backend did not respond within the configured timeout
    #[error("SearXNG request timed out after {seconds}s - the instance may be overloaded, retry later")]
    Timeout {
        /// The timeout that was exceeded
        seconds: u64,
    },

    /// The backend response was not valid JSON in the expected shape
    #[error("failed to parse SearXNG response: {0}")]
    Parse(#[source] reqwest::Error),

    /// Connection-level failure reaching the backend
    #[error("request to SearXNG failed: {0}")]
    Http(#[source] reqwest::Error),
}

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;

impl From<SearchError> for McpError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Validation(msg) => McpError::invalid_params(msg, None),
            other => McpError::internal_error(other.to_string(), None),
        }
    }
}

/// Fatal configuration errors detected at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid SearXNG URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("timeout must be between 1 and 300 seconds, got {0}")]
    InvalidTimeout(u64),

    #[error("max_results must be between 1 and 100, got {0}")]
    InvalidMaxResults(usize),

    #[error("port must be between 1 and 65535, got {0}")]
    InvalidPort(u32),

    #[error("unknown transport '{0}' - expected 'stdio' or 'http'")]
    InvalidTransport(String),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for {var}: {value}")]
    InvalidEnvVar { var: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_invalid_params() {
        let err: McpError = SearchError::Validation("query cannot be empty".to_string()).into();
        assert_eq!(err.code, McpError::invalid_params("", None).code);
        assert!(err.message.contains("query cannot be empty"));
    }

    #[test]
    fn backend_error_preserves_status() {
        let err: McpError = SearchError::Backend {
            status: 503,
            body_excerpt: "service unavailable".to_string(),
        }
        .into();
        assert_eq!(err.code, McpError::internal_error("", None).code);
        assert!(err.message.contains("503"));
    }

    #[test]
    fn timeout_error_suggests_retry() {
        let err: McpError = SearchError::Timeout { seconds: 30 }.into();
        assert!(err.message.contains("retry"));
        assert!(err.message.contains("30"));
    }
}
