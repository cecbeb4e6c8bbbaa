//! Core module containing shared infrastructure components.
//!
//! Configuration, the process-level error type, the MCP server handler and
//! the stdio transport.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportError, TransportResult, serve_stdio};
