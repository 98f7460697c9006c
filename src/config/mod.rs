//! Configuration types for the Commerce Platform SDK.
//!
//! This module provides the core configuration types used to initialize
//! the SDK for API communication with the Commerce Platform.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`CommerceConfig`]: The main configuration struct holding all SDK settings
//! - [`CommerceConfigBuilder`]: A builder for constructing [`CommerceConfig`] instances
//! - [`CmsId`]: A validated Commerce Manager ID newtype
//! - [`AccessToken`]: A validated access token newtype with masked debug output
//! - [`ApiVersion`]: An optional Graph API version pin
//!
//! # Example
//!
//! ```rust
//! use facebook_commerce::{CommerceConfig, CmsId, AccessToken};
//!
//! let config = CommerceConfig::builder()
//!     .cms_id(CmsId::new("1234567890").unwrap())
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, CmsId};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// The Graph API endpoint all requests are sent to unless overridden.
pub const BASE_URL: &str = "https://graph.facebook.com";

/// Configuration for the Commerce Platform SDK.
///
/// This struct holds all configuration needed for SDK operations: the CMS ID
/// scoping order endpoints, the access token injected into every request, and
/// optional transport settings. It is created once at client construction and
/// never mutated.
///
/// # Thread Safety
///
/// `CommerceConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use facebook_commerce::{CommerceConfig, CmsId, AccessToken, ApiVersion};
///
/// let config = CommerceConfig::builder()
///     .cms_id(CmsId::new("1234567890").unwrap())
///     .access_token(AccessToken::new("my-token").unwrap())
///     .api_version(ApiVersion::new("v23.0").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_version().unwrap().as_str(), "v23.0");
/// ```
#[derive(Clone, Debug)]
pub struct CommerceConfig {
    cms_id: CmsId,
    access_token: AccessToken,
    api_version: Option<ApiVersion>,
    base_url: String,
    danger_accept_invalid_certs: bool,
}

impl CommerceConfig {
    /// Creates a new builder for constructing a `CommerceConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use facebook_commerce::{CommerceConfig, CmsId, AccessToken};
    ///
    /// let config = CommerceConfig::builder()
    ///     .cms_id(CmsId::new("123").unwrap())
    ///     .access_token(AccessToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> CommerceConfigBuilder {
        CommerceConfigBuilder::new()
    }

    /// Returns the CMS ID.
    #[must_use]
    pub const fn cms_id(&self) -> &CmsId {
        &self.cms_id
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the pinned Graph API version, if configured.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns whether TLS certificate verification is disabled.
    #[must_use]
    pub const fn danger_accept_invalid_certs(&self) -> bool {
        self.danger_accept_invalid_certs
    }
}

// Verify CommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CommerceConfig>();
};

/// Builder for constructing [`CommerceConfig`] instances.
///
/// This builder provides a fluent API for configuring the SDK. Required
/// fields are `cms_id` and `access_token`. All other fields have defaults.
///
/// # Defaults
///
/// - `api_version`: `None` (unversioned Graph endpoint)
/// - `base_url`: [`BASE_URL`]
/// - `danger_accept_invalid_certs`: `false` (certificates are verified)
///
/// # Example
///
/// ```rust
/// use facebook_commerce::{CommerceConfig, CmsId, AccessToken, ApiVersion};
///
/// let config = CommerceConfig::builder()
///     .cms_id(CmsId::new("1234567890").unwrap())
///     .access_token(AccessToken::new("my-token").unwrap())
///     .api_version(ApiVersion::new("v23.0").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct CommerceConfigBuilder {
    cms_id: Option<CmsId>,
    access_token: Option<AccessToken>,
    api_version: Option<ApiVersion>,
    base_url: Option<String>,
    danger_accept_invalid_certs: Option<bool>,
}

impl CommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CMS ID (required).
    #[must_use]
    pub fn cms_id(mut self, cms_id: CmsId) -> Self {
        self.cms_id = Some(cms_id);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Pins requests to a specific Graph API version.
    ///
    /// When set, the version is inserted as the first path segment of every
    /// request URL (e.g., `https://graph.facebook.com/v23.0/{path}`).
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Overrides the base URL requests are sent to.
    ///
    /// Intended for proxies and test servers. A trailing slash is stripped.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Disables TLS certificate verification.
    ///
    /// Certificates are verified by default. This opt-out exists only for
    /// test environments with self-signed certificates; never enable it
    /// against the production endpoint.
    #[must_use]
    pub const fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.danger_accept_invalid_certs = Some(accept);
        self
    }

    /// Builds the [`CommerceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `cms_id` or
    /// `access_token` are not set, and [`ConfigError::InvalidBaseUrl`] if a
    /// base URL override has no `http://` or `https://` scheme.
    pub fn build(self) -> Result<CommerceConfig, ConfigError> {
        let cms_id = self
            .cms_id
            .ok_or(ConfigError::MissingRequiredField { field: "cms_id" })?;
        let access_token = self.access_token.ok_or(ConfigError::MissingRequiredField {
            field: "access_token",
        })?;

        let base_url = match self.base_url {
            Some(url) => {
                if !url.starts_with("https://") && !url.starts_with("http://") {
                    return Err(ConfigError::InvalidBaseUrl { url });
                }
                url.trim_end_matches('/').to_string()
            }
            None => BASE_URL.to_string(),
        };

        Ok(CommerceConfig {
            cms_id,
            access_token,
            api_version: self.api_version,
            base_url,
            danger_accept_invalid_certs: self.danger_accept_invalid_certs.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_cms_id() {
        let result = CommerceConfigBuilder::new()
            .access_token(AccessToken::new("token").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "cms_id" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = CommerceConfigBuilder::new()
            .cms_id(CmsId::new("123").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = CommerceConfig::builder()
            .cms_id(CmsId::new("123").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url(), BASE_URL);
        assert!(config.api_version().is_none());
        assert!(!config.danger_accept_invalid_certs());
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let config = CommerceConfig::builder()
            .cms_id(CmsId::new("123").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .base_url("http://127.0.0.1:8080/")
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_override_requires_scheme() {
        let result = CommerceConfig::builder()
            .cms_id(CmsId::new("123").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .base_url("graph.facebook.com")
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CommerceConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug_with_masked_token() {
        let config = CommerceConfig::builder()
            .cms_id(CmsId::new("123").unwrap())
            .access_token(AccessToken::new("super-secret").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.cms_id(), config.cms_id());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("CommerceConfig"));
        assert!(!debug_str.contains("super-secret"));
    }
}
