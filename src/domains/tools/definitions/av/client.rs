//! Shared Alpha Vantage HTTP client.
//!
//! Both tools issue the same shape of request: a GET against the query
//! endpoint with a `function`, tool-specific parameters and the API key.
//! The body is relayed untouched.

use reqwest::{Client, Url};
use tracing::{debug, instrument, warn};

use crate::core::{Config, Error, Result};
use crate::domains::tools::ToolError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the upstream market-data provider.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct AlphaVantageClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for AlphaVantageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl AlphaVantageClient {
    /// Build a client from the upstream and credentials configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Url::parse(&config.upstream.base_url).map_err(|e| {
            Error::config(format!(
                "invalid upstream URL '{}': {}",
                config.upstream.base_url, e
            ))
        })?;

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: config.upstream.base_url.clone(),
            api_key: config.credentials.api_key().to_string(),
        })
    }

    /// Build the request URL for the given query parameters.
    ///
    /// Values are substituted as-is. Reserved URL characters in a symbol are
    /// not escaped.
    pub fn query_url(&self, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}?", self.base_url);
        for (key, value) in params {
            url.push_str(key);
            url.push('=');
            url.push_str(value);
            url.push('&');
        }
        url.push_str("apikey=");
        url.push_str(&self.api_key);
        url
    }

    /// Issue one GET and return the response body.
    ///
    /// The status code is not inspected: provider-level errors arrive as
    /// ordinary bodies and are returned as such.
    #[instrument(skip(self))]
    pub async fn fetch(&self, params: &[(&str, &str)]) -> std::result::Result<String, ToolError> {
        let url = self.query_url(params);

        let response = self.http.get(&url).send().await.map_err(|e| {
            let e = e.without_url();
            warn!("Upstream request failed: {}", e);
            ToolError::network(&e)
        })?;

        let status = response.status();
        debug!("Upstream responded with {}", status);

        let body = response.bytes().await.map_err(|e| {
            let e = e.without_url();
            warn!("Failed to read upstream response body: {}", e);
            ToolError::io(&e)
        })?;

        debug!("Upstream response received: {} bytes", body.len());

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
