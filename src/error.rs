use thiserror::Error;

/// Custom error types for barcart
#[derive(Debug, Error)]
pub enum BarcartError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid lookup endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
