//! Error Types

use thiserror::Error;

/// Result type alias for validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Input problems caught before any network call is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are empty
    #[error("missing fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// A numeric-only field did not parse as a finite number
    #[error("invalid number in field '{field}'")]
    InvalidNumber { field: String },

    /// The endpoint URL is empty or not an http(s) address
    #[error("invalid endpoint URL: '{url}'")]
    InvalidUrl { url: String },
}

impl ValidationError {
    /// Short toast title for this error
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingFields { .. } => "Missing Information",
            ValidationError::InvalidNumber { .. } => "Invalid Number",
            ValidationError::InvalidUrl { .. } => "Invalid Endpoint",
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingFields { .. } => "Please fill in all fields.".into(),
            ValidationError::InvalidNumber { field } => {
                format!("Please enter a valid numerical value for {field}.")
            }
            ValidationError::InvalidUrl { .. } => {
                "Please enter a valid http(s) endpoint URL.".into()
            }
        }
    }
}
