//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Commerce Manager ID.
///
/// The CMS ID scopes the order-related endpoints (`{cms_id}/commerce_orders`,
/// `{cms_id}/order_management_apps`). This newtype ensures the value is
/// non-empty and provides type safety to prevent accidental misuse of raw
/// strings.
///
/// # Example
///
/// ```rust
/// use facebook_commerce::CmsId;
///
/// let cms_id = CmsId::new("1234567890").unwrap();
/// assert_eq!(cms_id.as_ref(), "1234567890");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CmsId(String);

impl CmsId {
    /// Creates a new validated CMS ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCmsId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyCmsId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for CmsId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CmsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Commerce Platform access token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AccessToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use facebook_commerce::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}
