//! HTTP-specific error types.
//!
//! This module contains error types for HTTP operations and the error-message
//! enrichment applied to unexpected responses.
//!
//! # Error Handling
//!
//! The SDK uses specific error types for different failure scenarios:
//!
//! - [`HttpError::Network`]: Transport-level failures (connection, TLS, read)
//! - [`HttpError::Response`]: Responses outside the recognized success class
//! - [`HttpError::MalformedBody`]: Success responses whose body is not valid JSON
//! - [`HttpError::MissingField`]: Success responses missing an expected field
//!
//! # Example
//!
//! ```rust,ignore
//! use facebook_commerce::{HttpError, OrderApi};
//!
//! match api.get_order_details("123", None).await {
//!     Ok(order) => println!("Order: {order}"),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.status, e.message);
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::client::response::HttpResponse;
use thiserror::Error;

/// Builds the diagnostic message for an unexpected response.
///
/// The message is, by priority: the HTTP status message if present, else the
/// status code; when the body parses as JSON and carries a human-readable
/// explanation at `error.error_user_msg`, that explanation is appended after
/// `": "`. A body that is empty, is not valid JSON, or lacks the field leaves
/// the base message unchanged; enrichment never fails.
pub(crate) fn error_message(status_message: Option<&str>, status_code: u16, body: &str) -> String {
    let base = status_message.map_or_else(|| status_code.to_string(), str::to_owned);

    if body.is_empty() {
        return base;
    }
    let Ok(parsed) = serde_json::from_str::<serde_json::Value>(body) else {
        return base;
    };
    match parsed
        .pointer("/error/error_user_msg")
        .and_then(serde_json::Value::as_str)
    {
        Some(user_msg) => format!("{base}: {user_msg}"),
        None => base,
    }
}

/// Error returned when an HTTP request receives a response outside the
/// recognized success class.
///
/// The error message is enriched with the `error.error_user_msg` field the
/// remote API nests in its JSON error payloads, when present, turning an
/// opaque HTTP failure into an actionable message for operators. The raw
/// status and body are carried for programmatic inspection.
///
/// # Example
///
/// ```rust
/// use facebook_commerce::client::{HttpResponse, UnexpectedResponseError};
///
/// let response = HttpResponse::new(
///     400,
///     Some("Bad Request".to_string()),
///     r#"{"error":{"error_user_msg":"Order is already acknowledged."}}"#.to_string(),
/// );
/// let error = UnexpectedResponseError::new(response);
/// assert_eq!(error.to_string(), "Bad Request: Order is already acknowledged.");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct UnexpectedResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The canonical status message, if the status code has one.
    pub status_message: Option<String>,
    /// The raw response body.
    pub body: String,
    /// The enriched diagnostic message.
    pub message: String,
}

impl UnexpectedResponseError {
    /// Creates a new error from a response snapshot, enriching the message
    /// from the response body.
    #[must_use]
    pub fn new(response: HttpResponse) -> Self {
        let message = error_message(
            response.status_message.as_deref(),
            response.status,
            &response.body,
        );
        Self {
            status: response.status,
            status_message: response.status_message,
            body: response.body,
            message,
        }
    }
}

/// Unified error type for all HTTP-related failures.
///
/// Use pattern matching to handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network, TLS, or connection error. Surfaced unmodified; never retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An HTTP response outside the recognized success class.
    #[error(transparent)]
    Response(#[from] UnexpectedResponseError),

    /// A success-status response whose body is not valid JSON.
    #[error("Malformed response body: {source}")]
    MalformedBody {
        /// The JSON parse failure.
        source: serde_json::Error,
        /// The raw response body that failed to parse.
        body: String,
    },

    /// A success-status response missing a field this SDK unwraps.
    #[error("Response is missing expected field '{field}'")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_appends_error_user_msg() {
        let message = error_message(
            Some("Bad Request"),
            400,
            r#"{"error":{"error_user_msg":"Order is already acknowledged."}}"#,
        );
        assert_eq!(message, "Bad Request: Order is already acknowledged.");
    }

    #[test]
    fn test_message_falls_back_to_status_code_without_status_message() {
        let message = error_message(None, 418, "");
        assert_eq!(message, "418");
    }

    #[test]
    fn test_message_with_empty_body_is_status_message_alone() {
        let message = error_message(Some("Bad Request"), 400, "");
        assert_eq!(message, "Bad Request");
    }

    #[test]
    fn test_message_with_invalid_json_body_swallows_parse_failure() {
        let message = error_message(Some("Internal Server Error"), 500, "<html>oops</html>");
        assert_eq!(message, "Internal Server Error");
    }

    #[test]
    fn test_message_with_json_body_missing_field_is_unchanged() {
        let message = error_message(Some("Forbidden"), 403, r#"{"error":{"code":190}}"#);
        assert_eq!(message, "Forbidden");
    }

    #[test]
    fn test_message_ignores_non_string_error_user_msg() {
        let message = error_message(Some("Bad Request"), 400, r#"{"error":{"error_user_msg":42}}"#);
        assert_eq!(message, "Bad Request");
    }

    #[test]
    fn test_unexpected_response_error_carries_raw_response() {
        let response = HttpResponse::new(
            404,
            Some("Not Found".to_string()),
            r#"{"error":{"error_user_msg":"Unknown order."}}"#.to_string(),
        );
        let error = UnexpectedResponseError::new(response);

        assert_eq!(error.status, 404);
        assert_eq!(error.status_message.as_deref(), Some("Not Found"));
        assert!(error.body.contains("Unknown order."));
        assert_eq!(error.to_string(), "Not Found: Unknown order.");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error =
            &UnexpectedResponseError::new(HttpResponse::new(400, None, String::new()));
        let _ = response_error;

        let missing: &dyn std::error::Error = &HttpError::MissingField { field: "data" };
        let _ = missing;
    }
}
