//! Latest quote tool (`GLOBAL_QUOTE`).
//!
//! Returns the latest price and volume snapshot for a ticker. The upstream
//! body is relayed verbatim.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::client::AlphaVantageClient;
use super::common::{into_call_result, require_string};
use crate::domains::tools::{ToolError, ToolHandler};

/// Parameters for the latest quote lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LastQuoteParams {
    /// Ticker symbol.
    #[schemars(description = "The symbol of the global ticker of your choice. For example: symbol=IBM.")]
    pub symbol: String,
}

/// Latest quote tool implementation.
#[derive(Debug, Clone)]
pub struct LastQuoteTool {
    client: AlphaVantageClient,
}

impl LastQuoteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "last_quote";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the latest price and volume information for a ticker of your choice.";

    /// Upstream function name.
    const FUNCTION: &'static str = "GLOBAL_QUOTE";

    /// Create the tool around a shared upstream client.
    pub fn new(client: AlphaVantageClient) -> Self {
        Self { client }
    }

    /// Validate arguments and fetch the raw quote payload.
    #[instrument(skip_all, fields(tool = Self::NAME))]
    pub async fn fetch(&self, arguments: &JsonObject) -> Result<String, ToolError> {
        let symbol = require_string(arguments, "symbol")?;
        info!("Fetching latest quote for {}", symbol);

        self.client
            .fetch(&[("function", Self::FUNCTION), ("symbol", symbol)])
            .await
    }

    /// Execute the tool logic.
    pub async fn execute(&self, arguments: &JsonObject) -> CallToolResult {
        into_call_result(self.fetch(arguments).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<LastQuoteParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for LastQuoteTool {
    fn descriptor(&self) -> Tool {
        Self::to_tool()
    }

    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        self.execute(&arguments).await
    }
}
