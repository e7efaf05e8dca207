//! Prediction Endpoint Client
//!
//! One POST per submission, `Content-Type: application/json`, no retry and
//! no timeout. An unresponsive endpoint simply never settles the future;
//! the UI's disabled submit control prevents duplicates in the meantime.

use predict_core::{EndpointConfig, PredictionPayload, PredictionResult};
use uuid::Uuid;

use crate::error::{ClientError, Result};

/// Client bound to one endpoint configuration
#[derive(Clone, Debug)]
pub struct PredictionClient {
    http: reqwest::Client,
    config: EndpointConfig,
}

impl PredictionClient {
    /// Create a client for the given endpoint
    pub fn new(config: EndpointConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client for the compiled-in default endpoint
    pub fn localhost() -> Self {
        Self::new(EndpointConfig::default())
    }

    /// Endpoint this client posts to
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Submit one validated payload and parse the reply.
    ///
    /// 2xx with a parseable body yields the result; a non-2xx status,
    /// transport failure, or unparseable body each map to their own
    /// [`ClientError`] variant.
    pub async fn predict(&self, payload: &PredictionPayload) -> Result<PredictionResult> {
        let submission = Uuid::new_v4();
        tracing::info!(%submission, url = %self.config.url, "submitting prediction request");

        let response = self
            .http
            .post(&self.config.url)
            .json(payload)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(%submission, error = %err, "transport failure");
                ClientError::Network(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%submission, code = status.as_u16(), "endpoint rejected request");
            return Err(ClientError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|err| {
            tracing::error!(%submission, error = %err, "failed reading response body");
            ClientError::Network(err)
        })?;

        let result: PredictionResult = serde_json::from_str(&body).map_err(|err| {
            tracing::error!(%submission, error = %err, "unparseable response body");
            ClientError::Parse(err)
        })?;

        tracing::info!(%submission, "prediction request succeeded");
        Ok(result)
    }
}
