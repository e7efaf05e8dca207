//! Error Types

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Ways a single submission attempt can fail after dispatch.
/// All are terminal for that attempt; no retry is made.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Endpoint answered outside the 2xx range
    #[error("prediction endpoint returned HTTP {code}")]
    Status { code: u16 },

    /// Transport-level failure before a full response arrived
    #[error("network error: {0}")]
    Network(reqwest::Error),

    /// Response body was not JSON of the expected shape
    #[error("malformed prediction response: {0}")]
    Parse(serde_json::Error),
}

impl ClientError {
    /// Convert to a user-friendly message. The full diagnostic stays in
    /// the logs; this is what the failure toast shows.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status { code } => {
                format!("The prediction service returned HTTP {code}.")
            }
            ClientError::Network(_) => "Unable to connect to the prediction API.".into(),
            ClientError::Parse(_) => {
                "The prediction service returned an unreadable response.".into()
            }
        }
    }
}
