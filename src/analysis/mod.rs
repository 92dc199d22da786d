//! Client for the external analysis service.
//!
//! The service itself (entity extraction, generative text, whatever the
//! deployment wires up) is an external collaborator; this module only relays
//! normalized transcripts to it and hands the JSON reply back.

use anyhow::{Context, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(Debug, Serialize)]
struct AnalysisPayload<'a> {
    text: &'a str,
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(endpoint: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to build HTTP client for analysis service")?;

        info!("Initialized analysis client with endpoint: {}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// POST normalized transcript text to the analysis service and return its
    /// JSON reply verbatim.
    pub async fn analyze(&self, text: &str) -> Result<serde_json::Value> {
        debug!("Relaying {} chars to {}", text.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalysisPayload { text })
            .send()
            .await
            .context("Failed to reach analysis service")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read analysis service response body")?;

        if !status.is_success() {
            error!(
                "Analysis service request failed with status {}: {}",
                status, response_text
            );
            return Err(anyhow::anyhow!(
                "Analysis service request failed with status {}: {}",
                status,
                response_text
            ));
        }

        let reply: serde_json::Value = serde_json::from_str(&response_text)
            .context("Failed to parse analysis service response")?;

        debug!("Analysis service replied with {} chars", response_text.len());

        Ok(reply)
    }
}
