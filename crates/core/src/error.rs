//! Error types for redactor operations.
//!
//! The analysis pipeline itself never fails: malformed markup, empty text and
//! missing keywords all degrade to defined values. [`AdvisorError`] covers the
//! edges around it, namely loading configuration, building selectors and
//! serializing reports.
//!
//! # Example
//!
//! ```rust
//! use redactor_core::{AdvisorConfig, AdvisorError};
//!
//! match AdvisorConfig::from_toml_str("min_keyword_words = \"many\"") {
//!     Ok(_) => unreachable!(),
//!     Err(AdvisorError::ConfigParse(msg)) => println!("bad config: {}", msg),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Main error type for redactor.
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Configuration values that parse but make no sense.
    ///
    /// Returned when a loaded configuration violates a constraint, such as a
    /// zero recommended keyword count.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed as TOML or JSON.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// File read errors while loading configuration.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSS selector.
    ///
    /// Only reachable through [`crate::parse::Document::select`] with a
    /// caller-supplied selector.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Report serialization failure.
    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<toml::de::Error> for AdvisorError {
    fn from(err: toml::de::Error) -> Self {
        AdvisorError::ConfigParse(err.to_string())
    }
}

/// Result type alias for AdvisorError.
pub type Result<T> = std::result::Result<T, AdvisorError>;
