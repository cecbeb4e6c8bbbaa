//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves the tools over
//! stdin/stdout.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use market_data_mcp_server::core::{Config, McpServer, serve_stdio};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Upstream endpoint: {}", config.upstream.base_url);
    if config.credentials.alpha_vantage_api_key.is_none() {
        warn!("AV_API_KEY not set - upstream calls will be sent with an empty API key");
    }

    let server = McpServer::new(config)?;

    info!(
        "{} v{} initialized with tools: {}",
        server.name(),
        server.version(),
        server.tool_names().join(", ")
    );

    serve_stdio(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
