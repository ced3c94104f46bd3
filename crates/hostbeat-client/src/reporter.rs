//! HTTP reporter for the collector endpoint

use std::time::Duration;

use hostbeat_core::FieldValue;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use crate::error::TransportError;

/// Reports detected changes to the remote collector
///
/// One POST per changed field, body `{field: value}`. Exactly HTTP 200 counts
/// as success for both the reachability probe and reports.
#[derive(Debug, Clone)]
pub struct Reporter {
    client: Client,
    collector_url: Url,
    probe_timeout: Duration,
}

impl Reporter {
    /// Create a reporter for a collector base URL
    ///
    /// # Errors
    /// Returns an error if the URL is invalid.
    pub fn new(
        collector_url: impl AsRef<str>,
        probe_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let collector_url = Url::parse(collector_url.as_ref())?;
        Ok(Self {
            client: Client::new(),
            collector_url,
            probe_timeout,
        })
    }

    /// The collector base URL
    #[must_use]
    pub fn collector_url(&self) -> &Url {
        &self.collector_url
    }

    /// One-shot reachability probe against the collector
    ///
    /// # Errors
    /// Returns an error if the GET does not complete within the probe timeout
    /// or the collector answers anything but 200.
    #[instrument(skip(self))]
    pub async fn probe(&self) -> Result<(), TransportError> {
        let response = self
            .client
            .get(self.collector_url.clone())
            .timeout(self.probe_timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        debug!(url = %self.collector_url, "collector reachable");
        Ok(())
    }

    /// Report one changed field as `{field: value}`
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-200 answer. The caller
    /// decides whether to swallow it; this delta is never retried here.
    #[instrument(skip(self, value))]
    pub async fn report_field(
        &self,
        field: &str,
        value: &FieldValue,
    ) -> Result<(), TransportError> {
        let mut body = serde_json::Map::new();
        body.insert(field.to_string(), serde_json::to_value(value)?);

        let response = self
            .client
            .post(self.collector_url.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        debug!(field, "reported changed field");
        Ok(())
    }
}
