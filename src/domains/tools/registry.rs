//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools, built once at startup
//! - Dispatch of a call to the handler registered under its name
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{instrument, warn};

use crate::core::{Config, Result};

use super::definitions::{AlphaVantageClient, LastQuoteTool, TimeSeriesDailyTool};
use super::handlers::{ToolHandler, call_with_recovery};

/// Tool registry - owns one handler per advertised tool.
pub struct ToolRegistry {
    handlers: Vec<Arc<dyn ToolHandler>>,
}

impl ToolRegistry {
    /// Build every tool from `config`. The tools share one upstream client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = AlphaVantageClient::new(config)?;

        Ok(Self {
            handlers: vec![
                Arc::new(LastQuoteTool::new(client.clone())),
                Arc::new(TimeSeriesDailyTool::new(client)),
            ],
        })
    }

    /// Registered handlers, in registration order.
    pub fn handlers(&self) -> &[Arc<dyn ToolHandler>] {
        &self.handlers
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<String> {
        self.handlers
            .iter()
            .map(|h| h.descriptor().name.into_owned())
            .collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn tools(&self) -> Vec<Tool> {
        self.handlers.iter().map(|h| h.descriptor()).collect()
    }

    /// Look up a handler by tool name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.handlers.iter().find(|h| h.descriptor().name == name)
    }

    /// Dispatch a call to the named tool.
    ///
    /// An unknown name yields an error result without touching the network.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        match self.get(name) {
            Some(handler) => call_with_recovery(handler.as_ref(), arguments).await,
            None => {
                warn!("Unknown tool requested: {}", name);
                CallToolResult::error(vec![Content::text(format!("Unknown tool: {}", name))])
            }
        }
    }
}
