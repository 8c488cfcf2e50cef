//! Wiener Linien monitor client
//!
//! Fetches realtime departure monitors from the OGD realtime API, one
//! synchronous attempt per call: a non-200 status is a hard failure and
//! there are no retries. Callers wanting resilience wrap the client
//! themselves.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::audit::RequestAudit;
use crate::config::WienerLinienConfig;
use crate::error::MonitorError;
use crate::models::StopMonitor;
use crate::parse;

/// Trait for realtime monitor clients
#[async_trait]
pub trait MonitorClient: Send + Sync {
    /// Fetch the realtime snapshot for a stop
    async fn fetch_monitor(&self, stop_id: &str) -> Result<StopMonitor, MonitorError>;

    /// Fetch the raw monitor response body for a stop
    async fn fetch_monitor_raw(&self, stop_id: &str) -> Result<String, MonitorError>;

    /// Check if the monitor API is reachable
    async fn is_healthy(&self) -> bool;
}

/// HTTP client for the Wiener Linien OGD realtime monitor endpoint
pub struct WienerLinienClient {
    client: Client,
    config: WienerLinienConfig,
    audit: Option<Arc<dyn RequestAudit>>,
}

impl fmt::Debug for WienerLinienClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WienerLinienClient")
            .field("config", &self.config)
            .field("audit", &self.audit.as_ref().map(|_| "RequestAudit"))
            .finish()
    }
}

impl WienerLinienClient {
    /// Create a new monitor client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &WienerLinienConfig) -> Result<Self, MonitorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("libreoeffis/0.1")
            .build()
            .map_err(|e| MonitorError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            audit: None,
        })
    }

    /// Attach an audit hook invoked after every successful request
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<dyn RequestAudit>) -> Self {
        self.audit = Some(audit);
        self
    }

    fn monitor_url(&self) -> String {
        format!("{}/monitor", self.config.base_url)
    }

    fn map_send_error(&self, e: &reqwest::Error) -> MonitorError {
        if e.is_timeout() {
            MonitorError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            MonitorError::ConnectionFailed(e.to_string())
        }
    }
}

#[async_trait]
impl MonitorClient for WienerLinienClient {
    #[instrument(skip(self))]
    async fn fetch_monitor(&self, stop_id: &str) -> Result<StopMonitor, MonitorError> {
        let body = self.fetch_monitor_raw(stop_id).await?;
        let monitor = parse::stop_monitor(&body)?;

        debug!(stop = %monitor.title, lines = monitor.lines.len(), "Monitor fetched");
        Ok(monitor)
    }

    #[instrument(skip(self))]
    async fn fetch_monitor_raw(&self, stop_id: &str) -> Result<String, MonitorError> {
        let url = self.monitor_url();
        debug!(?url, %stop_id, "Fetching realtime monitor");

        let response = self
            .client
            .get(&url)
            .query(&[("stopId", stop_id)])
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if status.as_u16() != 200 {
            return Err(MonitorError::HttpStatus {
                code: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MonitorError::ConnectionFailed(e.to_string()))?;

        if let Some(audit) = &self.audit {
            audit.record(&format!("{url}?stopId={stop_id}"));
        }

        if !body.trim_start().starts_with('{') {
            return Err(MonitorError::InvalidPayload(
                "response is not a JSON object".to_string(),
            ));
        }

        Ok(body)
    }

    async fn is_healthy(&self) -> bool {
        self.client.get(self.monitor_url()).send().await.is_ok()
    }
}
