//! HTTP client types for Commerce Platform API communication.
//!
//! This module provides the shared request/response pipeline the endpoint
//! APIs in [`crate::apis`] are built on. It handles authenticated URL
//! construction, parameter encoding, request dispatch, and response
//! classification.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`Params`]: String-keyed request parameters
//! - [`HttpResponse`]: A snapshot of one HTTP exchange
//! - [`HttpError`]: Unified error type for HTTP operations
//! - [`UnexpectedResponseError`]: A non-success response with an enriched
//!   diagnostic message
//!
//! # Wire Format
//!
//! GET requests place all parameters (including the access token) in the URL
//! query string, percent-encoded. POST requests place them in an
//! `application/x-www-form-urlencoded` body whose values are not further
//! percent-escaped beyond what the caller pre-encoded. Responses are JSON;
//! errors are communicated via non-2xx status plus an optional JSON body with
//! `error.error_user_msg`.

mod errors;
mod http_client;
mod request;
mod response;

pub use errors::{HttpError, UnexpectedResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use request::{HttpMethod, Params};
pub use response::HttpResponse;
