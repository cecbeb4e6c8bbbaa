//! Alpha Vantage tools module.
//!
//! - `quote`: latest price/volume snapshot (`last_quote`)
//! - `time_series`: daily OHLCV history (`time_series_daily`)
//!
//! Both share one [`AlphaVantageClient`].

pub mod client;
pub mod common;
pub mod quote;
pub mod time_series;

#[cfg(test)]
pub(crate) mod stub;

pub use client::AlphaVantageClient;
pub use quote::{LastQuoteParams, LastQuoteTool};
pub use time_series::{OutputSize, TimeSeriesDailyParams, TimeSeriesDailyTool};
