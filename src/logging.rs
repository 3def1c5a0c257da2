//! Tracing setup
//!
//! Logs go to stderr (stdout is reserved for the MCP protocol) with
//! environment-based filtering via RUST_LOG. The default directive comes
//! from the configured log level.
//!
//! Set `LOG_FORMAT=json` for structured JSON output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for the server
///
/// `level` is the default level for this crate when RUST_LOG is not set.
pub fn init_tracing(level: &str) -> anyhow::Result<()> {
    let directive = format!("searxng_mcp={}", level);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}
