//! # predict-client
//!
//! The HTTP boundary of the prediction web client. Wraps `reqwest` so the
//! same call path serves the browser (fetch) and native integration tests
//! (hyper). Every failure is terminal for its submission attempt; see
//! [`ClientError`] for how responses are classified.

pub mod client;
pub mod error;

pub use client::PredictionClient;
pub use error::{ClientError, Result};
