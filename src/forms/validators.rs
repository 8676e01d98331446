use std::fmt;

use crate::booking::FieldValue;

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks run after the required check has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Accepts anything; only the required check applies.
    None,
    /// Rejects non-empty values made only of whitespace.
    NotBlank,
    /// Exactly three digits after trimming.
    Cvv,
}

/// Rules attached to one form field: a required message plus a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub label: String,
    pub required: String,
    pub validator: Validator,
}

impl FieldRules {
    /// Runs only the validator.
    ///
    /// For [`Validator::NotBlank`] an empty value is accepted here; emptiness
    /// is reported through [`FieldRules::check`] using the required message.
    pub fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        match self.validator {
            Validator::None => Ok(()),
            Validator::NotBlank => {
                if value.is_falsy() {
                    return Ok(());
                }
                if value.to_text().trim().is_empty() {
                    Err(ValidationError::new(format!(
                        "{} cannot contain only whitespace",
                        self.label
                    )))
                } else {
                    Ok(())
                }
            }
            Validator::Cvv => {
                if value.is_falsy() {
                    return Err(ValidationError::new(&self.required));
                }
                let text = value.to_text();
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::new(&self.required));
                }
                if !trimmed.chars().all(|ch| ch.is_ascii_digit()) {
                    return Err(ValidationError::new(format!(
                        "{} must contain only numbers",
                        self.label
                    )));
                }
                if trimmed.len() != 3 {
                    return Err(ValidationError::new(format!(
                        "{} must be exactly 3 digits",
                        self.label
                    )));
                }
                Ok(())
            }
        }
    }

    /// Required check followed by the validator, as the form layer applies
    /// them on submit.
    pub fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        if value.is_falsy() {
            return Err(ValidationError::new(&self.required));
        }
        self.validate(value)
    }

    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.required = message.into();
        self
    }
}

fn required_message(label: &str) -> String {
    format!("{label} is required")
}

/// Rules for a required free-text field.
pub fn required_rules(label: &str) -> FieldRules {
    FieldRules {
        label: label.to_string(),
        required: required_message(label),
        validator: Validator::NotBlank,
    }
}

/// Rules for a required field with no further checks (checkboxes).
pub fn presence_rules(label: &str) -> FieldRules {
    FieldRules {
        label: label.to_string(),
        required: required_message(label),
        validator: Validator::None,
    }
}

/// Rules for the card verification value.
pub fn cvv_rules(label: &str) -> FieldRules {
    FieldRules {
        label: label.to_string(),
        required: required_message(label),
        validator: Validator::Cvv,
    }
}
