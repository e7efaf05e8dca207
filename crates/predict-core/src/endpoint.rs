//! Prediction Endpoint Configuration

use crate::error::ValidationError;

/// Address used when the user has not supplied one
pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:5000/predict";

/// Which of the two request shapes the endpoint expects
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestShape {
    /// Named job-posting fields
    #[default]
    JobPosting,
    /// Four-element numeric feature vector
    Features,
}

/// Where and how to submit predictions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Target of the POST request
    pub url: String,

    /// Request body shape
    pub shape: RequestShape,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT_URL.into(),
            shape: RequestShape::default(),
        }
    }
}

impl EndpointConfig {
    /// Default URL with an explicit request shape
    pub fn with_shape(shape: RequestShape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Check a user-edited URL before accepting it
    pub fn validate_url(url: &str) -> Result<(), ValidationError> {
        if url.is_empty() || !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ValidationError::InvalidUrl { url: url.into() });
        }
        Ok(())
    }
}
