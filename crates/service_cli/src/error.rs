//! CLI error type.

use pricer_bsm::types::PricingError;
use thiserror::Error;

/// Errors surfaced to the user by the `bsm-pricer` binary.
///
/// Every variant renders as a single line; `main` prints it and exits with
/// a failure status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Self-check failed: {0}")]
    CheckFailed(String),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
