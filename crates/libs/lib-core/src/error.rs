//! # Centralized Error Handling
//!
//! [`CoreError`] covers the few fallible steps of the front end core, all of which
//! happen once at startup:
//!
//! - [`Config`](CoreError::Config) - a build-time setting failed to parse or validate
//! - [`Catalog`](CoreError::Catalog) - a bundled translation file is not valid JSON
//!
//! Formatting and menu composition are infallible and never return this type.
//!
//! ```rust
//! use lib_core::error::{CoreError, Result};
//!
//! fn parse_interval(raw: &str) -> Result<u32> {
//!     raw.parse()
//!         .map_err(|_| CoreError::Config(format!("not a number: {raw}")))
//! }
//!
//! assert!(parse_interval("1000").is_ok());
//! assert!(parse_interval("soon").is_err());
//! ```

use thiserror::Error;

use crate::i18n::Language;

/// Convenience type alias for `Result<T, CoreError>`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration value missing its expected shape.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Translation catalog failed to parse.
    #[error("Translation catalog for {language:?} is invalid: {source}")]
    Catalog {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
}
