//! Error types for brick-instructions
//!
//! Every public operation returns `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the catalog client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Unexpected response from catalog: {message}")]
    UpstreamFormat { message: String },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Page budget exhausted after {pages} pages (next offset {offset}) while more data remained")]
    PageBudgetExceeded { pages: u32, offset: u32 },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an upstream format error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamFormat {
            message: message.into(),
        }
    }

    /// Create a selector error
    pub fn selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// True for failures of the transport itself, as opposed to bad content
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. }
        )
    }
}

/// Result type alias for brick-instructions
pub type Result<T> = std::result::Result<T, Error>;
