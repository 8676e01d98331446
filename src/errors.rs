use thiserror::Error;

use crate::booking::BookingStep;
use crate::forms::FieldErrors;

/// Failures while loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Reasons a submit did not advance the wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),
    #[error("Form for `{found}` submitted while the wizard is at `{expected}`")]
    StepMismatch {
        expected: BookingStep,
        found: BookingStep,
    },
    #[error("Booking already confirmed")]
    AlreadyConfirmed,
}

impl WizardError {
    /// Field errors when the submit failed validation.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            WizardError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
