//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use sharepoint_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or validating client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Site URL is invalid.
    #[error("Invalid site URL '{url}'. Expected an absolute URL with scheme (e.g., 'https://contoso.sharepoint.com/sites/dev').")]
    InvalidSiteUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid bearer token.")]
    EmptyAccessToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
