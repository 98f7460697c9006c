//! Request types and parameter encoding.
//!
//! This module provides the [`HttpMethod`] type and the two wire encodings
//! the Graph API accepts: percent-encoded query strings for GET requests and
//! form-encoded bodies for POST requests.

use std::collections::HashMap;
use std::fmt;

/// HTTP methods used by the Commerce Platform API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for mutating resources.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Request parameters as a string-keyed mapping. Ordering is irrelevant on
/// the wire; values are passed through unvalidated (the remote service is
/// the source of truth for validation).
pub type Params = HashMap<String, String>;

/// Encodes parameters as a URL query string, percent-escaping keys and values.
pub(crate) fn encode_query(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Encodes parameters as an `application/x-www-form-urlencoded` body.
///
/// Values are NOT percent-escaped beyond what the caller pre-encoded; the
/// remote endpoints accept (and for some fields expect) raw JSON values in
/// form pairs.
pub(crate) fn encode_form(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
