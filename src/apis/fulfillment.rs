//! Shipment attachment.
//!
//! Wraps the Fulfillment API: attaching shipments with tracking information
//! to acknowledged orders.

use serde::Serialize;

use crate::apis::idempotency_key;
use crate::client::{HttpClient, HttpError, Params};
use crate::config::CommerceConfig;

/// One shipped item, identified by retailer ID or product ID.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ShipmentItem {
    /// The merchant's own identifier for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retailer_id: Option<String>,
    /// The platform's identifier for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    /// The number of units shipped.
    pub quantity: u32,
}

/// Tracking information for a shipment.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TrackingInfo {
    /// Carrier code (e.g., `FEDEX`, `USPS`).
    pub carrier: String,
    /// The carrier's tracking number.
    pub tracking_number: String,
    /// Human-readable shipping method name (e.g., `Standard`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method_name: Option<String>,
}

/// Client for the Fulfillment API.
#[derive(Debug)]
pub struct FulfillmentApi {
    http_client: HttpClient,
}

impl FulfillmentApi {
    /// Creates a new Fulfillment API client from the given configuration.
    #[must_use]
    pub fn new(config: &CommerceConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Attaches a shipment to an order.
    ///
    /// Items and tracking information are JSON-encoded into the form body. An
    /// optional external shipment ID distinguishes multiple shipments for the
    /// same order. A fresh idempotency key is attached so the remote service
    /// can deduplicate retried calls.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, an unexpected response, or
    /// a malformed body.
    ///
    /// # Panics
    ///
    /// Panics if the items or tracking info fail to serialize, which cannot
    /// happen for these plain string/number types.
    pub async fn attach_shipment(
        &self,
        order_id: &str,
        items: &[ShipmentItem],
        tracking_info: &TrackingInfo,
        external_shipment_id: Option<&str>,
    ) -> Result<serde_json::Value, HttpError> {
        let mut params = Params::new();
        params.insert(
            "items".to_string(),
            serde_json::to_string(items).expect("shipment items serialize to JSON"),
        );
        params.insert(
            "tracking_info".to_string(),
            serde_json::to_string(tracking_info).expect("tracking info serializes to JSON"),
        );
        params.insert("idempotency_key".to_string(), idempotency_key());
        if let Some(id) = external_shipment_id {
            params.insert("external_shipment_id".to_string(), id.to_string());
        }
        let path = format!("{order_id}/shipments");
        self.http_client.post(&path, &params).await
    }
}
