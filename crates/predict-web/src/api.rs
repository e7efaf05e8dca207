//! API Client Glue
//!
//! Bridges the form to `predict-client` and stamps results on arrival.
//! Failures come back as toast-ready text; the full diagnostic is already
//! logged inside the client.

use chrono::{DateTime, Utc};

use predict_client::PredictionClient;
use predict_core::{EndpointConfig, PredictionPayload, PredictionResult};

/// A parsed endpoint reply plus when it arrived
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedPrediction {
    pub result: PredictionResult,
    pub received_at: DateTime<Utc>,
}

/// Submit one validated payload to the configured endpoint
pub async fn submit(
    config: EndpointConfig,
    payload: PredictionPayload,
) -> Result<RecordedPrediction, String> {
    let client = PredictionClient::new(config);
    match client.predict(&payload).await {
        Ok(result) => Ok(RecordedPrediction {
            result,
            received_at: Utc::now(),
        }),
        Err(err) => Err(err.user_message()),
    }
}
