//! Error types for the form controller
//!
//! Validation failures are not errors: they are shown inline next to the
//! field. These variants cover the few genuine faults around the controller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthFormError {
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid log filter '{filter}': {source}")]
    LogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("submission failed: {0}")]
    Submission(String),
}

pub type Result<T> = std::result::Result<T, AuthFormError>;
