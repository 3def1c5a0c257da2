//! Configuration loading for searxng-mcp
//!
//! Configuration is layered, later sources winning:
//! 1. Built-in defaults
//! 2. TOML file at the path in `SEARXNG_MCP_CONFIG` (if set)
//! 3. Environment variables: `SEARXNG_URL`, `SEARXNG_TIMEOUT`,
//!    `SEARXNG_MAX_RESULTS`, `MCP_TRANSPORT`, `MCP_PORT`, `LOG_LEVEL`
//!
//! The result is validated once at startup and immutable afterwards; it is
//! passed explicitly to each component rather than held as global state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::error::ConfigError;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SearXNG backend configuration
    #[serde(default)]
    pub searxng: SearxngConfig,
    /// Transport configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Log level for the crate's tracing directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// SearXNG backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearxngConfig {
    /// SearXNG instance URL
    #[serde(default = "default_searxng_url")]
    pub url: String,
    /// Connect and total request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Maximum results returned per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

/// Transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Transport mode, fixed for the process lifetime
    #[serde(default)]
    pub transport: TransportMode,
    /// Listen port for the streamable HTTP transport
    #[serde(default = "default_port")]
    pub port: u16,
}

/// How tool calls reach the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Line-delimited messages over stdin/stdout, single sequential client
    #[default]
    Stdio,
    /// Streamable HTTP over a TCP port, multiple concurrent clients
    Http,
}

fn default_searxng_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_results() -> usize {
    10
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            searxng: SearxngConfig::default(),
            server: ServerConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for SearxngConfig {
    fn default() -> Self {
        Self {
            url: default_searxng_url(),
            timeout_seconds: default_timeout(),
            max_results: default_max_results(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: TransportMode::default(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment, then validate
    pub fn load() -> Result<Self, ConfigError> {
        // Runs before tracing is initialized, so no logging here
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            }
            _ => Self::default(),
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn find_config_path() -> Option<PathBuf> {
        std::env::var("SEARXNG_MCP_CONFIG").ok().map(PathBuf::from)
    }

    /// Apply environment variable overrides (highest priority)
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var("SEARXNG_URL") {
            self.searxng.url = url;
        }
        if let Ok(val) = std::env::var("SEARXNG_TIMEOUT") {
            self.searxng.timeout_seconds = parse_env("SEARXNG_TIMEOUT", &val)?;
        }
        if let Ok(val) = std::env::var("SEARXNG_MAX_RESULTS") {
            self.searxng.max_results = parse_env("SEARXNG_MAX_RESULTS", &val)?;
        }
        if let Ok(val) = std::env::var("MCP_TRANSPORT") {
            self.server.transport = match val.to_ascii_lowercase().as_str() {
                "stdio" => TransportMode::Stdio,
                "http" => TransportMode::Http,
                other => return Err(ConfigError::InvalidTransport(other.to_string())),
            };
        }
        if let Ok(val) = std::env::var("MCP_PORT") {
            let port: u32 = parse_env("MCP_PORT", &val)?;
            if port == 0 || port > u16::MAX as u32 {
                return Err(ConfigError::InvalidPort(port));
            }
            self.server.port = port as u16;
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.log_level = level;
        }
        Ok(())
    }

    /// Validate ranges and the backend URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.searxng.url).map_err(|e| ConfigError::InvalidUrl {
            url: self.searxng.url.clone(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl {
                url: self.searxng.url.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.searxng.timeout_seconds == 0 || self.searxng.timeout_seconds > 300 {
            return Err(ConfigError::InvalidTimeout(self.searxng.timeout_seconds));
        }
        if self.searxng.max_results == 0 || self.searxng.max_results > 100 {
            return Err(ConfigError::InvalidMaxResults(self.searxng.max_results));
        }
        if self.server.port == 0 {
            return Err(ConfigError::InvalidPort(0));
        }
        Ok(())
    }

    /// Backend URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.searxng.url.trim_end_matches('/')
    }
}

fn parse_env<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.searxng.url, "http://localhost:8080");
        assert_eq!(config.searxng.timeout_seconds, 30);
        assert_eq!(config.searxng.max_results, 10);
        assert_eq!(config.server.transport, TransportMode::Stdio);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn toml_file_overrides_defaults() {
        let config: Config = toml::from_str(
            r#"
            log_level = "debug"

            [searxng]
            url = "https://searx.example.org"
            timeout_seconds = 5

            [server]
            transport = "http"
            port = 8080
            "#,
        )
        .unwrap();

        assert_eq!(config.searxng.url, "https://searx.example.org");
        assert_eq!(config.searxng.timeout_seconds, 5);
        // Unset fields keep their defaults
        assert_eq!(config.searxng.max_results, 10);
        assert_eq!(config.server.transport, TransportMode::Http);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn rejects_unknown_transport_value() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [server]
            transport = "sse"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = Config::default();
        config.searxng.timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout(0))
        ));
    }

    #[test]
    fn rejects_excessive_timeout() {
        let mut config = Config::default();
        config.searxng.timeout_seconds = 400;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTimeout(400))
        ));
    }

    #[test]
    fn rejects_bad_max_results() {
        let mut config = Config::default();
        config.searxng.max_results = 0;
        assert!(config.validate().is_err());
        config.searxng.max_results = 200;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_http_url() {
        let mut config = Config::default();
        config.searxng.url = "ftp://example.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_unparseable_url() {
        let mut config = Config::default();
        config.searxng.url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn base_url_strips_trailing_slash() {
        let mut config = Config::default();
        config.searxng.url = "https://searx.example.org/".to_string();
        assert_eq!(config.base_url(), "https://searx.example.org");
    }
}
