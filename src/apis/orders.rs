//! Order listing and details.
//!
//! Wraps the Order API: listing the orders scoped to a Commerce Manager ID
//! and fetching the details of a single order.
//!
//! # Example
//!
//! ```rust,ignore
//! use facebook_commerce::{CommerceConfig, ListOrdersParams, OrderApi};
//!
//! let api = OrderApi::new(&config);
//!
//! // List newly created orders
//! let params = ListOrdersParams {
//!     state: Some("CREATED".to_string()),
//!     ..Default::default()
//! };
//! let orders = api.list_orders(&params).await?;
//!
//! // Fetch one order with a field filter
//! let order = api.get_order_details("1320178428999123", Some("id,buyer_details")).await?;
//! ```

use crate::client::{HttpClient, HttpError, Params};
use crate::config::{CmsId, CommerceConfig};

/// Filters for [`OrderApi::list_orders`].
///
/// All fields are optional; the remote service defaults to orders in the
/// `CREATED` state when no state filter is given. Values are passed through
/// unvalidated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOrdersParams {
    /// The state of the orders to list: `CREATED`, `FB_PROCESSING`,
    /// `IN_PROGRESS`, or `COMPLETED`.
    pub state: Option<String>,
    /// Unix timestamp; only orders updated before this instant.
    pub updated_before: Option<String>,
    /// Unix timestamp; only orders updated after this instant.
    pub updated_after: Option<String>,
}

impl ListOrdersParams {
    pub(crate) fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(state) = &self.state {
            params.insert("state".to_string(), state.clone());
        }
        if let Some(updated_before) = &self.updated_before {
            params.insert("updated_before".to_string(), updated_before.clone());
        }
        if let Some(updated_after) = &self.updated_after {
            params.insert("updated_after".to_string(), updated_after.clone());
        }
        params
    }
}

/// Client for the Order API.
#[derive(Debug)]
pub struct OrderApi {
    http_client: HttpClient,
    cms_id: CmsId,
}

impl OrderApi {
    /// Creates a new Order API client from the given configuration.
    #[must_use]
    pub fn new(config: &CommerceConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
            cms_id: config.cms_id().clone(),
        }
    }

    /// Lists the orders scoped to the configured CMS ID.
    ///
    /// Returns the unwrapped `data` field of the response: a JSON array of
    /// order objects.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, an unexpected response, a
    /// malformed body, or a response missing the `data` field.
    pub async fn list_orders(
        &self,
        params: &ListOrdersParams,
    ) -> Result<serde_json::Value, HttpError> {
        let path = format!("{}/commerce_orders", self.cms_id);
        let body = self.http_client.get(&path, &params.to_params()).await?;
        body.get("data")
            .cloned()
            .ok_or(HttpError::MissingField { field: "data" })
    }

    /// Fetches the details of a single order.
    ///
    /// `fields` is an optional comma-separated list of fields to include in
    /// the response (e.g., `"id,buyer_details,channel"`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on transport failure, an unexpected response, or
    /// a malformed body.
    pub async fn get_order_details(
        &self,
        order_id: &str,
        fields: Option<&str>,
    ) -> Result<serde_json::Value, HttpError> {
        let mut params = Params::new();
        if let Some(fields) = fields {
            params.insert("fields".to_string(), fields.to_string());
        }
        self.http_client.get(order_id, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_orders_params_skips_unset_fields() {
        let params = ListOrdersParams::default().to_params();
        assert!(params.is_empty());
    }

    #[test]
    fn test_list_orders_params_maps_all_fields() {
        let params = ListOrdersParams {
            state: Some("COMPLETED".to_string()),
            updated_before: Some("1700000000".to_string()),
            updated_after: Some("1690000000".to_string()),
        }
        .to_params();

        assert_eq!(params.get("state"), Some(&"COMPLETED".to_string()));
        assert_eq!(params.get("updated_before"), Some(&"1700000000".to_string()));
        assert_eq!(params.get("updated_after"), Some(&"1690000000".to_string()));
    }
}
