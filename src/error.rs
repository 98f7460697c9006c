//! Error types for SDK configuration.
//!
//! This module contains error types used for configuration and validation
//! errors raised before any request is sent.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use facebook_commerce::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// CMS ID cannot be empty.
    #[error("CMS ID cannot be empty. Please provide the Commerce Manager ID that scopes your order endpoints.")]
    EmptyCmsId,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Commerce Platform access token.")]
    EmptyAccessToken,

    /// Graph API version is invalid.
    #[error("Invalid Graph API version '{version}'. Expected format: 'vN.N' (e.g., 'v23.0').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://graph.facebook.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_access_token_error_message() {
        let error = ConfigError::EmptyAccessToken;
        let message = error.to_string();
        assert!(message.contains("Access token cannot be empty"));
        assert!(message.contains("Commerce Platform access token"));
    }

    #[test]
    fn test_invalid_api_version_error_message() {
        let error = ConfigError::InvalidApiVersion {
            version: "23.0".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("23.0"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "cms_id" };
        let message = error.to_string();
        assert!(message.contains("cms_id"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyCmsId;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
