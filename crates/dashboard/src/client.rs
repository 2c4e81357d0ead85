// File: crates/dashboard/src/client.rs
// Summary: HTTP client for the crime-log backend. One GET per call, typed errors instead of silent drops.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::breakdown::{Breakdown, BreakdownKind};
use crate::error::{FetchError, NetworkError};
use crate::summary::CrimeCountSummary;

/// Endpoint serving the two-count summary.
pub const TOTAL_ENDPOINT: &str = "/api/total";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// API client for the crime-log backend
#[derive(Clone, Debug)]
pub struct StatsClient {
    base_url: String,
    client: reqwest::Client,
}

impl StatsClient {
    /// Client against `base_url` (e.g. `http://localhost:5000`) with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(base_url, Some(DEFAULT_TIMEOUT))
    }

    /// `None` waits on a reply indefinitely.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build().map_err(NetworkError::Client)?;
        Ok(Self { base_url: base_url.into().trim_end_matches('/').to_string(), client })
    }

    /// Underlying HTTP client; the log crawler reuses it.
    pub fn http(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` once and decode the body as JSON. Only `200 OK` counts as success.
    pub async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.url_for(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(|source| {
            warn!(%url, error = %source, "request failed");
            NetworkError::Transport { url: url.clone(), source }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%url, %status, "unexpected status");
            return Err(NetworkError::Status { url, status }.into());
        }

        let body = response
            .text()
            .await
            .map_err(|source| NetworkError::Transport { url: url.clone(), source })?;
        debug!(%url, bytes = body.len(), "response received");

        serde_json::from_str(&body).map_err(|source| {
            warn!(%url, error = %source, "response is not valid JSON");
            FetchError::Decode { url, source }
        })
    }

    /// Fetch and validate the crime count summary.
    pub async fn fetch_total(&self) -> Result<CrimeCountSummary, FetchError> {
        let value = self.fetch_json(TOTAL_ENDPOINT).await?;
        CrimeCountSummary::from_json(&value).map_err(|source| {
            warn!(error = %source, "summary failed validation");
            FetchError::Schema { url: self.url_for(TOTAL_ENDPOINT), source }
        })
    }

    /// Fetch and validate one of the breakdown endpoints.
    pub async fn fetch_breakdown(&self, kind: BreakdownKind) -> Result<Breakdown, FetchError> {
        let value = self.fetch_json(kind.endpoint()).await?;
        Breakdown::from_json(kind, &value).map_err(|source| {
            warn!(endpoint = kind.endpoint(), error = %source, "breakdown failed validation");
            FetchError::Schema { url: self.url_for(kind.endpoint()), source }
        })
    }
}
