//! Form Field State and Validation
//!
//! Raw keystroke-level strings live here until submit, when they either
//! validate into a typed [`PredictionPayload`] or reject with a
//! [`ValidationError`]. No network call happens on rejection.

use crate::error::ValidationError;
use crate::payload::PredictionPayload;

/// Raw inputs for the job-posting request shape
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobFormFields {
    pub company_name: String,
    pub job_role: String,
    pub job_description: String,
    /// Numeric-only field, kept as entered until validation
    pub salary: String,
}

impl JobFormFields {
    /// Validate all fields and build the outbound payload
    pub fn validate(&self) -> Result<PredictionPayload, ValidationError> {
        let required = [
            ("company name", &self.company_name),
            ("job role", &self.job_role),
            ("job description", &self.job_description),
            ("salary", &self.salary),
        ];
        check_required(&required)?;

        let salary = parse_finite("salary", &self.salary)?;

        Ok(PredictionPayload::JobPosting {
            company_name: self.company_name.clone(),
            job_description: self.job_description.clone(),
            job_role: self.job_role.clone(),
            salary,
        })
    }
}

/// Raw inputs for the feature-vector request shape
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureFormFields {
    pub features: [String; 4],
}

impl FeatureFormFields {
    /// Validate all four slots and build the outbound payload
    pub fn validate(&self) -> Result<PredictionPayload, ValidationError> {
        let names = ["feature 1", "feature 2", "feature 3", "feature 4"];
        let required: Vec<(&str, &String)> =
            names.iter().copied().zip(self.features.iter()).collect();
        check_required(&required)?;

        let mut values = [0.0_f64; 4];
        for (slot, (name, raw)) in values.iter_mut().zip(names.iter().zip(&self.features)) {
            *slot = parse_finite(name, raw)?;
        }

        Ok(PredictionPayload::Features { features: values })
    }
}

fn check_required(fields: &[(&str, &String)]) -> Result<(), ValidationError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| (*name).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        tracing::debug!(?missing, "rejecting submission with empty fields");
        Err(ValidationError::MissingFields { fields: missing })
    }
}

fn parse_finite(field: &str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            tracing::debug!(field, raw, "rejecting non-numeric input");
            ValidationError::InvalidNumber {
                field: field.to_string(),
            }
        })
}
