//! Response snapshot type.

/// A snapshot of one HTTP exchange, as produced by the transport layer.
///
/// The body is kept as raw text; whether and how it parses as JSON is decided
/// during classification.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The canonical status message (e.g., `Not Found`), if the status code
    /// has one.
    pub status_message: Option<String>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response snapshot.
    #[must_use]
    pub const fn new(status: u16, status_message: Option<String>, body: String) -> Self {
        Self {
            status,
            status_message,
            body,
        }
    }

    /// Returns whether the status code is in the 2xx success class.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
