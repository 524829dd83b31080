//! Upstream Client Module
//!
//! Thin GET wrapper around the JADX-AI plugin HTTP API.

use std::time::Duration;

use reqwest::Client;
use tracing::error;

use crate::config::UPSTREAM_TIMEOUT_SECS;
use crate::error::{ProxyError, Result};

// == Upstream Client ==
/// Client for relaying resource fetches to the plugin.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    // == Constructor ==
    /// Creates a new UpstreamClient for the given base address.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base address this client relays to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == Fetch ==
    /// Performs a single GET against `{base}/{resource}` and returns the
    /// response body as text.
    ///
    /// One request per call: no retry, no backoff. Failure is mapped onto the
    /// proxy taxonomy:
    /// - non-success status -> [`ProxyError::RemoteStatus`] with the upstream
    ///   code and body
    /// - no response at all (refused, unreachable, timed out) ->
    ///   [`ProxyError::RemoteUnavailable`]
    /// - anything else -> [`ProxyError::Internal`]
    pub async fn fetch(&self, resource: &str, params: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}/{}", self.base_url, resource);

        let response = self
            .client
            .get(&url)
            .query(params)
            .timeout(Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| {
                error!(resource, error = %e, "upstream request failed");
                ProxyError::RemoteUnavailable(e.to_string())
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(resource, error = %e, "failed to read upstream body");
            ProxyError::Internal(e.to_string())
        })?;

        if !status.is_success() {
            error!(resource, status = status.as_u16(), "upstream returned error status");
            return Err(ProxyError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
