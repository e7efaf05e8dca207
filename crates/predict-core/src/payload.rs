//! Outbound Request Payloads
//!
//! The two fixed wire shapes accepted by the prediction endpoint. Both are
//! serialized untagged so the JSON matches the endpoint's contract exactly.

use serde::Serialize;

/// Validated request body, ready to be posted as JSON
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PredictionPayload {
    /// Named job-posting fields: `{"company_name", "job_description", "job_role", "salary"}`
    JobPosting {
        company_name: String,
        job_description: String,
        job_role: String,
        salary: f64,
    },
    /// Generic numeric inputs: `{"features": [f64; 4]}`
    Features { features: [f64; 4] },
}
