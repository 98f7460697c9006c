//! App association and order acknowledgement.
//!
//! Wraps the Acknowledgement API: associating the order-management app with a
//! Commerce Manager account and acknowledging newly created orders.

use crate::apis::idempotency_key;
use crate::client::{HttpClient, HttpError, Params};
use crate::config::{CmsId, CommerceConfig};

/// Client for the Acknowledgement API.
#[derive(Debug)]
pub struct AcknowledgementApi {
    http_client: HttpClient,
    cms_id: CmsId,
}

impl AcknowledgementApi {
    /// Creates a new Acknowledgement API client from the given configuration.
    #[must_use]
    pub fn new(config: &CommerceConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            cms_id: config.cms_id().clone(),
        }
    }

    /// Associates the calling app as the order-management app for the
    /// configured CMS ID.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, an unexpected response, or
    /// a malformed body.
    pub async fn associate_app(&self) -> Result<serde_json::Value, HttpError> {
        let path = format!("{}/order_management_apps", self.cms_id);
        self.http_client.post(&path, &Params::new()).await
    }

    /// Acknowledges an order, moving it from `CREATED` to `IN_PROGRESS`.
    ///
    /// An optional merchant order reference associates the order with the
    /// merchant's own order ID. A fresh idempotency key is attached so the
    /// remote service can deduplicate retried calls.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, an unexpected response, or
    /// a malformed body.
    pub async fn acknowledge_order(
        &self,
        order_id: &str,
        merchant_order_reference: Option<&str>,
    ) -> Result<serde_json::Value, HttpError> {
        let mut params = Params::new();
        params.insert("idempotency_key".to_string(), idempotency_key());
        if let Some(reference) = merchant_order_reference {
            params.insert("merchant_order_reference".to_string(), reference.to_string());
        }
        let path = format!("{order_id}/acknowledge_order");
        self.http_client.post(&path, &params).await
    }
}
