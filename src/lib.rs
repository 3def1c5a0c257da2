//! SearXNG MCP Server
//!
//! Exposes a self-hosted SearXNG metasearch instance as MCP tools:
//! web search, image search, and video search. The adapter translates tool
//! calls into HTTP queries against the SearXNG JSON API and reshapes the
//! responses into the MCP result schema.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use searxng_mcp::{Config, SearxngMcpServer};
//!
//! let config = Config::load()?;
//! let server = SearxngMcpServer::new(&config)?;
//! // Serve via stdio or streamable HTTP, see `transport::serve`
//! ```
//!
//! # Configuration
//! Set `SEARXNG_URL` (and friends) in the environment, or point
//! `SEARXNG_MCP_CONFIG` at a TOML file. See [`config::Config`].

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod server;
pub mod transport;
pub mod types;

// Re-export the main entry points
pub use client::SearxngClient;
pub use config::{Config, TransportMode};
pub use error::{ConfigError, SearchError};
pub use server::{SearchParams, SearxngMcpServer};
pub use types::{Category, SearchResponse, SearchResult};
