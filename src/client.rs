//! HTTP client for the YGOPRODeck cardinfo endpoint.
//!
//! One request per fetch, bounded by the configured timeout. Transport
//! failures and non-success statuses become [`YgoError::FetchFailed`]; a body
//! that is not a card envelope becomes [`YgoError::DecodeFailed`].

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config;
use crate::error::{Result, YgoError};
use crate::filter::FilterSpec;
use crate::models::{CardResponse, CatalogSnapshot};

/// Anything that can turn a [`FilterSpec`] into a catalog snapshot.
///
/// [`CatalogClient`] is the network implementation; tests and offline
/// deployments can supply their own.
pub trait CatalogSource: Send + Sync {
    fn fetch(&self, filter: &FilterSpec) -> Result<CatalogSnapshot>;
}

/// Blocking client for the cardinfo endpoint.
pub struct CatalogClient {
    base_url: String,
    client: Client,
}

impl CatalogClient {
    /// Create a client against `base_url` (e.g. [`config::API_BASE`]).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| YgoError::InvalidArgument(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

impl CatalogSource for CatalogClient {
    fn fetch(&self, filter: &FilterSpec) -> Result<CatalogSnapshot> {
        let url = config::cardinfo_url(&self.base_url);
        let params = filter.query_pairs();
        debug!(%url, ?params, "fetching catalog");

        let resp = self.client.get(&url).query(&params).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let detail = upstream_error(&body).unwrap_or_else(|| "no error message".to_string());
            return Err(YgoError::FetchFailed(format!(
                "upstream returned status {status}: {detail}"
            )));
        }

        let response = decode_response(&body)?;
        debug!(cards = response.data.len(), "catalog fetched");
        Ok(CatalogSnapshot::new(filter.clone(), response.data))
    }
}

/// Decode a cardinfo response body.
pub fn decode_response(body: &str) -> Result<CardResponse> {
    Ok(serde_json::from_str(body)?)
}

/// Extract the `{"error": "..."}` message the API sends with failures.
fn upstream_error(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.as_str())
        .map(|s| s.to_string())
}
