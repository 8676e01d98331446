//! Terminal front-end for the booking wizard.

mod app;
pub mod interaction;
pub mod output;
pub mod render;
pub mod test_mode;

use thiserror::Error;

use crate::errors::{ConfigError, WizardError};

pub use app::{run_booking, run_cli, BookingOutcome, CliOptions};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Wizard(#[from] WizardError),
}
