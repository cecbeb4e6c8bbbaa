//! Daily time series tool (`TIME_SERIES_DAILY`).
//!
//! Returns raw daily OHLCV records for a ticker. The upstream body is relayed
//! verbatim.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::client::AlphaVantageClient;
use super::common::{into_call_result, require_string, string_or};
use crate::domains::tools::{ToolError, ToolHandler};

/// Size of the returned series.
///
/// Only advertised in the schema; the handler forwards whatever string the
/// host passes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    // latest 100 data points
    #[default]
    Compact,
    // 20+ years of history
    Full,
}

impl OutputSize {
    /// Value used in the upstream query string.
    pub fn as_api_param(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

/// Parameters for the daily time series lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TimeSeriesDailyParams {
    /// Ticker symbol.
    #[schemars(description = "The symbol of the global ticker of your choice. For example: symbol=IBM.")]
    pub symbol: String,

    /// Series length selector.
    #[schemars(
        description = "By default, outputsize=compact. Strings compact and full are accepted with the following specifications: compact returns only the latest 100 data points; full returns the full-length time series of 20+ years of historical data. The 'compact' option is recommended if you would like to reduce the data size of each API call."
    )]
    #[serde(default)]
    pub outputsize: OutputSize,
}

/// Daily time series tool implementation.
#[derive(Debug, Clone)]
pub struct TimeSeriesDailyTool {
    client: AlphaVantageClient,
}

impl TimeSeriesDailyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "time_series_daily";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns raw (as-traded) daily time series (date, daily open, daily high, daily low, daily close, daily volume) of the global equity specified, covering 20+ years of historical data. The OHLCV data is sometimes called 'candles' in finance literature.";

    /// Upstream function name.
    const FUNCTION: &'static str = "TIME_SERIES_DAILY";

    /// Create the tool around a shared upstream client.
    pub fn new(client: AlphaVantageClient) -> Self {
        Self { client }
    }

    /// Validate arguments and fetch the raw series payload.
    #[instrument(skip_all, fields(tool = Self::NAME))]
    pub async fn fetch(&self, arguments: &JsonObject) -> Result<String, ToolError> {
        let symbol = require_string(arguments, "symbol")?;
        let outputsize = string_or(arguments, "outputsize", OutputSize::default().as_api_param());
        info!("Fetching daily series for {} ({})", symbol, outputsize);

        self.client
            .fetch(&[
                ("function", Self::FUNCTION),
                ("symbol", symbol),
                ("outputsize", outputsize),
            ])
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
            input_schema: cached_schema_for_type::<TimeSeriesDailyParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for TimeSeriesDailyTool {
    fn descriptor(&self) -> Tool {
        Self::to_tool()
    }

    async fn call(&self, arguments: JsonObject) -> CallToolResult {
        self.execute(&arguments).await
    }
}
