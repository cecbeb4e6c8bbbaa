//! Tool-specific error types.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur while serving a single tool call.
///
/// Every variant is scoped to one call: it becomes an error call result and
/// never affects later calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// A required argument was missing or unusable. No request was sent.
    #[error("{0}")]
    Validation(String),

    /// The upstream could not be reached (DNS, connect, timeout).
    #[error("{0}")]
    Network(String),

    /// The connection succeeded but the response body could not be read.
    #[error("unable to read request response: {0}")]
    Io(String),
}

impl ToolError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a network error from a transport failure.
    pub fn network(err: &(dyn StdError + 'static)) -> Self {
        Self::Network(describe(err))
    }

    /// Create an I/O error from a failed body read.
    pub fn io(err: &(dyn StdError + 'static)) -> Self {
        Self::Io(describe(err))
    }
}

/// Render an error and its sources as `outer: inner: root`.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
