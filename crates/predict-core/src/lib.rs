//! # predict-core
//!
//! Domain logic for the prediction web client: form field state,
//! pre-dispatch validation, the submission status machine, the two outbound
//! request shapes, and display formatting for endpoint replies.
//!
//! Everything here is pure and I/O-free; the HTTP boundary lives in
//! `predict-client` and the Leptos UI in `predict-web`.

pub mod endpoint;
pub mod error;
pub mod form;
pub mod payload;
pub mod result;
pub mod status;

pub use endpoint::{DEFAULT_ENDPOINT_URL, EndpointConfig, RequestShape};
pub use error::ValidationError;
pub use form::{FeatureFormFields, JobFormFields};
pub use payload::PredictionPayload;
pub use result::{PredictionResult, PredictionValue};
pub use status::SubmissionStatus;
