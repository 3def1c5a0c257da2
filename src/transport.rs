//! Transport selection
//!
//! The transport mode is fixed at startup and never mixed: stdio serves a
//! single client sequentially over stdin/stdout, HTTP mode mounts the
//! streamable HTTP MCP service on a TCP port and serves each session with
//! its own clone of the server.

use anyhow::{Context, Result};
use rmcp::{
    transport::stdio,
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    },
    ServiceExt,
};

use crate::config::{ServerConfig, TransportMode};
use crate::server::SearxngMcpServer;

/// Serve the MCP server over the configured transport until shutdown
pub async fn serve(server: SearxngMcpServer, config: &ServerConfig) -> Result<()> {
    match config.transport {
        TransportMode::Stdio => serve_stdio(server).await,
        TransportMode::Http => serve_http(server, config.port).await,
    }
}

async fn serve_stdio(server: SearxngMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running on stdio, waiting for requests...");
    service.waiting().await?;

    Ok(())
}

/// Router exposing the MCP streamable HTTP endpoint at `/mcp`
pub fn http_router(server: SearxngMcpServer) -> axum::Router {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    axum::Router::new().nest_service("/mcp", service)
}

async fn serve_http(server: SearxngMcpServer, port: u16) -> Result<()> {
    let addr: std::net::SocketAddr = format!("0.0.0.0:{port}")
        .parse()
        .context("invalid bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind on port {port}"))?;

    tracing::info!(port, "Server running on streamable HTTP, waiting for connections...");

    axum::serve(listener, http_router(server))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
