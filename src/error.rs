use thiserror::Error;

/// Message shown when the service fails without telling us why
pub const GENERIC_SERVICE_ERROR: &str = "Failed to analyze ingredients. Please try again.";

/// Input rejected before any request is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or whitespace-only
    #[error("Please enter at least one ingredient")]
    EmptyInput,

    /// Input had content but nothing survived normalization
    #[error("Please enter valid ingredients separated by commas or semicolons")]
    NoValidIngredients,
}

/// Errors that can occur while analyzing ingredients
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Input failed local validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Service answered with a non-success status
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Request never completed or its body could not be read
    #[error("Recipe service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Another submission is still in flight
    #[error("A submission is already in progress")]
    Busy,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

impl AnalyzerError {
    /// Text to put in front of the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            AnalyzerError::Transport(_) => GENERIC_SERVICE_ERROR.to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AnalyzerError::Validation(_))
    }
}
