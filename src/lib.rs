//! Market Data MCP Server Library
//!
//! Exposes two Alpha Vantage lookups as Model Context Protocol tools:
//!
//! - `last_quote` - latest price and volume for a ticker
//! - `time_series_daily` - daily OHLCV history for a ticker
//!
//! Each call validates its arguments, issues a single GET to the provider and
//! relays the raw body back as text, prefixed with `Data: `.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transport
//! - **domains::tools**: tool definitions, registry and router
//!
//! # Example
//!
//! ```rust,no_run
//! use market_data_mcp_server::core::{Config, McpServer, serve_stdio};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     serve_stdio(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
