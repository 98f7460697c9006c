//! HTTP client for Commerce Platform API communication.
//!
//! This module provides the [`HttpClient`] type implementing the shared
//! request pipeline: building authenticated URLs, encoding parameters,
//! issuing the request, and classifying the response.

use std::collections::HashMap;
use std::time::Instant;

use crate::client::errors::{HttpError, UnexpectedResponseError};
use crate::client::request::{encode_form, encode_query, HttpMethod, Params};
use crate::client::response::HttpResponse;
use crate::config::{AccessToken, CommerceConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making authenticated requests to the Commerce Platform API.
///
/// The client handles:
/// - URL construction from the base URL, optional Graph API version, and path
/// - Access-token injection into every request (query string for GET,
///   form body for POST) so callers never supply it manually
/// - Structured request/response logging with elapsed time
/// - Response classification into parsed JSON or a diagnostic error
///
/// Each call performs exactly one HTTP round trip; there is no retry logic
/// and no timeout beyond what the host process wraps around the call.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use facebook_commerce::{CommerceConfig, CmsId, AccessToken};
/// use facebook_commerce::client::HttpClient;
///
/// let config = CommerceConfig::builder()
///     .cms_id(CmsId::new("1234567890").unwrap())
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let orders = client.get("1234567890/commerce_orders", &Default::default()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL including the version segment when one is configured
    /// (e.g., `https://graph.facebook.com/v23.0`).
    base_url: String,
    /// The access token merged into every request.
    access_token: AccessToken,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &CommerceConfig) -> Self {
        let base_url = config.api_version().map_or_else(
            || config.base_url().to_string(),
            |version| format!("{}/{version}", config.base_url()),
        );

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Facebook Commerce Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            access_token: config.access_token().clone(),
            default_headers,
        }
    }

    /// Returns the base URL for this client, including the version segment
    /// when one is configured.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request with the parameters (and the access token) encoded
    /// into the URL query string.
    ///
    /// The path must not itself contain the access token; it is appended here.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, a response outside the 2xx
    /// class, or a success body that is not valid JSON.
    pub async fn get(&self, path: &str, params: &Params) -> Result<serde_json::Value, HttpError> {
        let query = encode_query(&self.with_access_token(params));
        let url = format!("{}/{path}?{query}", self.base_url);
        self.send(HttpMethod::Get, &url, None).await
    }

    /// Sends a POST request with the parameters (and the access token) encoded
    /// into a form body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, a response outside the 2xx
    /// class, or a success body that is not valid JSON.
    pub async fn post(&self, path: &str, params: &Params) -> Result<serde_json::Value, HttpError> {
        let url = format!("{}/{path}", self.base_url);
        let body = encode_form(&self.with_access_token(params));
        self.send(HttpMethod::Post, &url, Some(body)).await
    }

    /// Merges the access token into a copy of the caller's parameters.
    fn with_access_token(&self, params: &Params) -> Params {
        let mut merged = params.clone();
        merged.insert(
            "access_token".to_string(),
            self.access_token.as_ref().to_string(),
        );
        merged
    }

    /// Sends a request and classifies the response against the 2xx success
    /// class.
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
    ) -> Result<serde_json::Value, HttpError> {
        self.send_expecting(method, url, body, |status| (200..300).contains(&status))
            .await
    }

    /// Sends a request and classifies the response with the given success
    /// predicate.
    ///
    /// On success the body is parsed as JSON; on failure a diagnostic
    /// [`UnexpectedResponseError`] is constructed from the response. A
    /// structured log entry (request echo, elapsed time, response summary) is
    /// emitted before classification; logging never affects the returned
    /// value.
    async fn send_expecting(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<String>,
        accept: impl Fn(u16) -> bool,
    ) -> Result<serde_json::Value, HttpError> {
        tracing::info!(
            method = %method,
            url,
            body = body.as_deref().unwrap_or(""),
            "request"
        );
        let started = Instant::now();

        let mut builder = match method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = body {
            builder = builder
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(body);
        }

        let result = builder.send().await?;
        let status = result.status();
        let status_message = status.canonical_reason().map(str::to_owned);
        let body_text = result.text().await?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

        tracing::info!(
            status = status.as_u16(),
            elapsed_ms,
            body = %body_text,
            "response"
        );

        let response = HttpResponse::new(status.as_u16(), status_message, body_text);
        if !accept(response.status) {
            tracing::error!(status = response.status, body = %response.body, "unexpected response");
            return Err(UnexpectedResponseError::new(response).into());
        }

        serde_json::from_str(&response.body).map_err(|source| HttpError::MalformedBody {
            source,
            body: response.body,
        })
    }
}
