//! Order cancellation and refunds.
//!
//! Wraps the Cancellation and Refund APIs: cancelling an order outright or
//! refunding it in full or in part.

use serde::Serialize;

use crate::apis::idempotency_key;
use crate::client::{HttpClient, HttpError, Params};
use crate::config::CommerceConfig;

/// One refunded item, identified by retailer ID or product ID. Required for
/// partial refunds.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct RefundItem {
    /// The merchant's own identifier for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retailer_id: Option<String>,
    /// The platform's identifier for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// The number of units refunded.
    pub quantity: u32,
}

/// Client for the Cancellation and Refund APIs.
#[derive(Debug)]
pub struct CancellationRefundApi {
    http_client: HttpClient,
}

impl CancellationRefundApi {
    /// Creates a new Cancellation/Refund API client from the given
    /// configuration.
    #[must_use]
    pub fn new(config: &CommerceConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Cancels an order.
    ///
    /// A fresh idempotency key is attached so the remote service can
    /// deduplicate retried calls. The response is typically
    /// `{"success": true}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, an unexpected response, or
    /// a malformed body.
    pub async fn cancel_order(&self, order_id: &str) -> Result<serde_json::Value, HttpError> {
        let mut params = Params::new();
        params.insert("idempotency_key".to_string(), idempotency_key());
        let path = format!("{order_id}/cancellations");
        self.http_client.post(&path, &params).await
    }

    /// Refunds an order.
    ///
    /// `reason_code` is the remote service's refund reason (e.g.,
    /// `REFUND_REASON_OTHER`), passed through unvalidated. `items` restricts
    /// the refund to specific items and is required for partial refunds; when
    /// given, it is JSON-encoded into the form body. A fresh idempotency key
    /// is attached so the remote service can deduplicate retried calls.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, an unexpected response, or
    /// a malformed body.
    ///
    /// # Panics
    ///
    /// Panics if the items fail to serialize, which cannot happen for these
    /// plain string/number types.
    pub async fn refund_order(
        &self,
        order_id: &str,
        reason_code: &str,
        items: Option<&[RefundItem]>,
    ) -> Result<serde_json::Value, HttpError> {
        let mut params = Params::new();
        params.insert("reason_code".to_string(), reason_code.to_string());
        params.insert("idempotency_key".to_string(), idempotency_key());
        if let Some(items) = items {
            params.insert(
                "items".to_string(),
                serde_json::to_string(items).expect("refund items serialize to JSON"),
            );
        }
        let path = format!("{order_id}/refunds");
        self.http_client.post(&path, &params).await
    }
}
