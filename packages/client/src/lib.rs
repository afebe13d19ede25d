#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! HTTP gateway to the dashboard feed backend.
//!
//! The backend exposes a single endpoint: `POST /api/v1/dashboard` with a
//! location payload, answering with a full [`DashboardSnapshot`]. Everything
//! that talks to it goes through the [`DashboardGateway`] trait so state
//! logic can be driven by a fake in tests.

use std::time::Duration;

use async_trait::async_trait;
// Consumers build `GatewayError::Status` values (fakes, retries) without
// depending on reqwest themselves.
pub use reqwest::StatusCode;
use weather_map_dashboard_models::{DashboardSnapshot, LocationQuery};

/// Errors that can occur while fetching a dashboard snapshot.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// HTTP transport failed (connect, timeout, TLS).
    #[error("Dashboard request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("Dashboard request returned HTTP {status}: {body}")]
    Status {
        /// Status code the backend answered with.
        status: reqwest::StatusCode,
        /// Response body, for the log.
        body: String,
    },

    /// Response body was not a valid snapshot.
    #[error("Failed to decode dashboard response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend origin, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Source of dashboard snapshots.
#[async_trait]
pub trait DashboardGateway: Send + Sync {
    /// Fetches a fresh snapshot for the given location.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the request, status, or decode fails.
    async fn fetch_dashboard(&self, query: &LocationQuery)
    -> Result<DashboardSnapshot, GatewayError>;
}

/// [`DashboardGateway`] over a real HTTP backend.
pub struct HttpDashboardGateway {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpDashboardGateway {
    /// Creates a gateway for the configured backend.
    #[must_use]
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1/dashboard", self.base_url)
    }
}

#[async_trait]
impl DashboardGateway for HttpDashboardGateway {
    async fn fetch_dashboard(
        &self,
        query: &LocationQuery,
    ) -> Result<DashboardSnapshot, GatewayError> {
        let url = self.endpoint();
        log::debug!(
            "Requesting dashboard snapshot from {url} for ({}, {})",
            query.lat,
            query.lon
        );

        let resp = self
            .client
            .post(&url)
            .json(query)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
