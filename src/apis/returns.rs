//! Return creation and updates.
//!
//! Wraps the Returns API: creating a return on behalf of a buyer and moving
//! an existing return through its lifecycle.

use serde::Serialize;

use crate::client::{HttpClient, HttpError, Params};
use crate::config::CommerceConfig;

/// One returned item, identified by item ID or retailer ID.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ReturnItem {
    /// The platform's identifier for the order line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// The merchant's own identifier for the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retailer_id: Option<String>,
    /// The number of units returned.
    pub quantity: u32,
    /// The buyer's stated return reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A prepaid shipping label attached to a return update.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ShippingLabel {
    /// Carrier code (e.g., `FEDEX`, `USPS`).
    pub carrier: String,
    /// The carrier's service name (e.g., `Ground`).
    pub service_name: String,
    /// The carrier's tracking number.
    pub tracking_number: String,
    /// Handle of the label file previously uploaded to the platform.
    pub file_handle: String,
    /// Label cost as a decimal string.
    pub cost: String,
}

/// Optional fields for [`ReturnApi::update_return`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateReturnOptions {
    /// Free-form notes for the buyer.
    pub notes: Option<String>,
    /// The merchant's own identifier for the return.
    pub merchant_return_id: Option<String>,
    /// Prepaid shipping labels for the buyer to use.
    pub return_shipping_labels: Option<Vec<ShippingLabel>>,
}

impl UpdateReturnOptions {
    /// # Panics
    ///
    /// Panics if the shipping labels fail to serialize, which cannot happen
    /// for these plain string types.
    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(notes) = &self.notes {
            params.insert("notes".to_string(), notes.clone());
        }
        if let Some(merchant_return_id) = &self.merchant_return_id {
            params.insert("merchant_return_id".to_string(), merchant_return_id.clone());
        }
        if let Some(labels) = &self.return_shipping_labels {
            params.insert(
                "return_shipping_labels".to_string(),
                serde_json::to_string(labels).expect("shipping labels serialize to JSON"),
            );
        }
        params
    }
}

/// Client for the Returns API.
#[derive(Debug)]
pub struct ReturnApi {
    http_client: HttpClient,
}

impl ReturnApi {
    /// Creates a new Returns API client from the given configuration.
    #[must_use]
    pub fn new(config: &CommerceConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Creates a return for an order.
    ///
    /// The items payload is JSON-encoded and then percent-escaped, which is
    /// the encoding this endpoint expects inside the form body.
    /// `return_status` is the initial status of the return (e.g.,
    /// `REQUESTED`, `APPROVED`, `DISAPPROVED`, `REFUNDED`,
    /// `MERCHANT_MARKED_COMPLETED`), passed through unvalidated. The response
    /// is typically `{"id": "<return id>"}`.
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
    pub async fn create_return(
        &self,
        order_id: &str,
        items: &[ReturnItem],
        return_status: &str,
        return_message: &str,
        merchant_return_id: &str,
    ) -> Result<serde_json::Value, HttpError> {
        let items_json = serde_json::to_string(items).expect("return items serialize to JSON");
        let mut params = Params::new();
        params.insert(
            "items".to_string(),
            urlencoding::encode(&items_json).into_owned(),
        );
        params.insert("return_status".to_string(), return_status.to_string());
        params.insert("return_message".to_string(), return_message.to_string());
        params.insert(
            "merchant_return_id".to_string(),
            merchant_return_id.to_string(),
        );
        let path = format!("{order_id}/returns");
        self.http_client.post(&path, &params).await
    }

    /// Applies an update event to an existing return.
    ///
    /// `update_event` is `ACCEPT_RETURN` or `CLOSE_RETURN`, passed through
    /// unvalidated. The options carry the event's optional fields; shipping
    /// labels are JSON-encoded into the form body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, an unexpected response, or
    /// a malformed body.
    pub async fn update_return(
        &self,
        return_id: &str,
        update_event: &str,
        options: &UpdateReturnOptions,
    ) -> Result<serde_json::Value, HttpError> {
        let mut params = options.to_params();
        params.insert("update_event".to_string(), update_event.to_string());
        let path = format!("{return_id}/update_return");
        self.http_client.post(&path, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_item_serializes_without_unset_fields() {
        let item = ReturnItem {
            item_id: Some("4413".to_string()),
            retailer_id: None,
            quantity: 1,
            reason: Some("DAMAGED".to_string()),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"item_id":"4413","quantity":1,"reason":"DAMAGED"}"#);
    }

    #[test]
    fn test_update_return_options_default_is_empty() {
        assert!(UpdateReturnOptions::default().to_params().is_empty());
    }

    #[test]
    fn test_update_return_options_json_encodes_labels() {
        let options = UpdateReturnOptions {
            notes: Some("Drop off at any location".to_string()),
            merchant_return_id: None,
            return_shipping_labels: Some(vec![ShippingLabel {
                carrier: "USPS".to_string(),
                service_name: "Ground".to_string(),
                tracking_number: "9400100000000000000000".to_string(),
                file_handle: "label-handle".to_string(),
                cost: "4.99".to_string(),
            }]),
        };
        let params = options.to_params();

        assert_eq!(
            params.get("notes"),
            Some(&"Drop off at any location".to_string())
        );
        assert!(!params.contains_key("merchant_return_id"));
        let labels = params.get("return_shipping_labels").unwrap();
        assert!(labels.starts_with('['));
        assert!(labels.contains(r#""carrier":"USPS""#));
    }
}
