//! Tool definitions module.
//!
//! Each tool is defined in its own file, grouped by upstream provider.

pub mod av;

pub use av::{
    AlphaVantageClient, LastQuoteParams, LastQuoteTool, OutputSize, TimeSeriesDailyParams,
    TimeSeriesDailyTool,
};
