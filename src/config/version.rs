//! Graph API version handling.
//!
//! The Graph API is versioned with a `vN.N` scheme (e.g., `v23.0`). When a
//! version is configured, it is inserted as the first path segment of every
//! request URL. When no version is configured, requests go to the unversioned
//! endpoint and the remote service applies its default version.

use crate::error::ConfigError;
use std::fmt;

/// A validated Graph API version.
///
/// # Accepted Format
///
/// Versions must match `vN.N`, a leading `v` followed by two dot-separated
/// numbers (e.g., `v23.0`).
///
/// # Example
///
/// ```rust
/// use facebook_commerce::ApiVersion;
///
/// let version = ApiVersion::new("v23.0").unwrap();
/// assert_eq!(version.as_str(), "v23.0");
///
/// assert!(ApiVersion::new("23.0").is_err());
/// assert!(ApiVersion::new("v23").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiVersion(String);

impl ApiVersion {
    /// Creates a new validated Graph API version.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the version does not
    /// match the `vN.N` format.
    pub fn new(version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if Self::is_valid(&version) {
            Ok(Self(version))
        } else {
            Err(ConfigError::InvalidApiVersion { version })
        }
    }

    /// Returns the version as a string slice (e.g., `"v23.0"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(version: &str) -> bool {
        let Some(rest) = version.strip_prefix('v') else {
            return false;
        };
        let mut parts = rest.split('.');
        let (Some(major), Some(minor), None) = (parts.next(), parts.next(), parts.next()) else {
            return false;
        };
        let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        numeric(major) && numeric(minor)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
