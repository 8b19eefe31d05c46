use std::io;

use thiserror::Error;

use crate::domain::Operation;

/// Library-wide error type for catalog operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// A URL could not be built from configuration or input.
    #[error("Invalid URL '{url}': {details}")]
    InvalidUrl { url: String, details: String },

    /// A form field is missing or malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// The name is already present in the catalog.
    #[error("The product \"{0}\" already exists.")]
    DuplicateProduct(String),

    /// The remote store has no product with this name.
    #[error("Product \"{0}\" not found.")]
    ProductNotFound(String),

    /// The remote store rejected the request or could not be reached.
    #[error("{}: {message}", operation.failure_label())]
    Api { operation: Operation, status: Option<u16>, message: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        AppError::InvalidInput(message.into())
    }

    /// Attribute a remote failure to `operation`.
    pub fn during(self, operation: Operation) -> Self {
        match self {
            AppError::Api { status, message, .. } => AppError::Api { operation, status, message },
            other => other,
        }
    }

    /// True for errors raised before any request reached the remote store.
    pub fn is_local(&self) -> bool {
        matches!(self, AppError::InvalidInput(_) | AppError::DuplicateProduct(_))
    }
}
