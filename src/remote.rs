//! HTTP classifier backend
//!
//! POSTs the rasterized grid as JSON to a prediction endpoint and reads the
//! predicted digit out of the response body. The endpoint contract is one
//! round trip: `{"data": <28x28 nested array>}` out, a body containing
//! `data.prediction` back.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};
use crate::rendering::raster::TargetGrid;
use crate::{Classifier, PadConfig};

/// Request body for the predict endpoint.
#[derive(Serialize)]
struct PredictRequest<'a> {
    data: &'a TargetGrid,
}

/// A classifier that defers to a remote HTTP model server.
pub struct RemoteClassifier {
    client: Client,
    endpoint: Url,
    user_agent: String,
    headers: HashMap<String, String>,
}

impl RemoteClassifier {
    /// Build a classifier from the pad configuration.
    ///
    /// The endpoint must be an absolute http or https URL; anything else is
    /// a configuration error, caught here rather than on first submit.
    pub fn new(config: &PadConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| Error::ConfigError(format!("Invalid endpoint URL: {}", e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::ConfigError(format!(
                "Unsupported endpoint scheme: {}",
                endpoint.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| Error::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            user_agent: config.user_agent.clone(),
            headers: config.headers.clone(),
        })
    }

    /// The endpoint this classifier talks to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Classifier for RemoteClassifier {
    fn name(&self) -> &str {
        "remote"
    }

    fn classify(&self, grid: &TargetGrid) -> Result<u8> {
        let body = serde_json::to_vec(&PredictRequest { data: grid })
            .map_err(|e| Error::Other(format!("Failed to encode grid payload: {}", e)))?;

        log::debug!(
            "posting {} inked cells to {}",
            grid.inked_cells(),
            self.endpoint
        );

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header("Content-Type", "application/json")
            .header("User-Agent", self.user_agent.clone())
            .body(body);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send()
            .map_err(|e| Error::PredictionUnavailable(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::PredictionUnavailable(format!(
                "Classifier returned status {}",
                status
            )));
        }

        let text = response
            .text()
            .map_err(|e| Error::PredictionUnavailable(format!("Failed to read response: {}", e)))?;
        let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            Error::PredictionUnavailable(format!("Response is not valid JSON: {}", e))
        })?;

        let label = value
            .get("data")
            .and_then(|d| d.get("prediction"))
            .and_then(|p| p.as_i64())
            .ok_or_else(|| {
                Error::PredictionUnavailable(format!("Unexpected response shape: {}", value))
            })?;

        if !(0..=9).contains(&label) {
            return Err(Error::PredictionUnavailable(format!(
                "Predicted label {} is outside 0..=9",
                label
            )));
        }

        Ok(label as u8)
    }
}
