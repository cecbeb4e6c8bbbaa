//! STDIO transport.
//!
//! The server speaks line-delimited JSON-RPC on stdin/stdout. Logging goes
//! to stderr so it never interleaves with protocol frames.

use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;

use super::McpServer;

/// Result type for transport operations.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The MCP handshake with the host failed.
    #[error("Server initialization error: {0}")]
    Init(String),

    /// The running service terminated with an error.
    #[error("Service error: {0}")]
    Service(String),
}

/// Serve `server` over stdin/stdout until the host disconnects.
pub async fn serve_stdio(server: McpServer) -> TransportResult<()> {
    info!("Ready - communicating via stdin/stdout");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| TransportError::Init(e.to_string()))?;

    service
        .waiting()
        .await
        .map_err(|e| TransportError::Service(e.to_string()))?;

    info!("STDIO transport finished");
    Ok(())
}
