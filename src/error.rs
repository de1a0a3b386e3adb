//! Error types for the graph service and its client
//!
//! Each layer owns a thiserror enum; the HTTP boundary maps these onto
//! status codes in `api::error`.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning user input into a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl GraphError {
    pub fn invalid(message: impl Into<String>) -> Self {
        GraphError::InvalidInput(message.into())
    }
}

impl From<csv::Error> for GraphError {
    fn from(error: csv::Error) -> Self {
        GraphError::InvalidInput(format!("Malformed CSV: {}", error))
    }
}

/// Failures while building the visualization document
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template registration failed: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Failed to encode graph data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Invalid environment configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors raised by the presentation client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Upload mode was selected without a file
    #[error("Please upload a CSV file.")]
    MissingFile,

    #[error("Cannot read edge list file {path}: {source}")]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Backend returned status {0}")]
    Backend(reqwest::StatusCode),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

impl ClientError {
    /// True for the errors that abort before any request is sent
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            ClientError::MissingFile | ClientError::UnreadableFile { .. }
        )
    }

    /// True when the service could not be reached or rejected the request
    pub fn is_backend_failure(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Backend(_))
    }
}
