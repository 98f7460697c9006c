//! # Facebook Commerce Rust SDK
//!
//! A Rust SDK for the Facebook Commerce Platform order-management API,
//! providing type-safe configuration, authenticated request handling, and
//! thin clients for the order, acknowledgement, fulfillment,
//! cancellation/refund, and returns endpoints.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`CommerceConfig`] and [`CommerceConfigBuilder`]
//! - Validated newtypes for the CMS ID and access token
//! - A shared HTTP pipeline that injects the access token into every request,
//!   encodes parameters, and classifies responses
//! - Diagnostic errors enriched with the remote API's `error.error_user_msg`
//!   explanation when one is present
//! - One endpoint client per API area: [`OrderApi`], [`AcknowledgementApi`],
//!   [`FulfillmentApi`], [`CancellationRefundApi`], [`ReturnApi`]
//!
//! Results are returned as generic [`serde_json::Value`] mappings; no schema
//! is enforced beyond "valid JSON". Each call performs exactly one HTTP round
//! trip: no retries, no rate limiting, no caching, no pagination handling
//! beyond what the remote API returns verbatim.
//!
//! ## Quick Start
//!
//! ```rust
//! use facebook_commerce::{CommerceConfig, CmsId, AccessToken};
//!
//! let config = CommerceConfig::builder()
//!     .cms_id(CmsId::new("1234567890").unwrap())
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Listing and Acknowledging Orders
//!
//! ```rust,ignore
//! use facebook_commerce::{AcknowledgementApi, ListOrdersParams, OrderApi};
//!
//! let orders = OrderApi::new(&config);
//! let acknowledgements = AcknowledgementApi::new(&config);
//!
//! // New orders start in the CREATED state
//! let created = orders.list_orders(&ListOrdersParams::default()).await?;
//!
//! for order in created.as_array().unwrap_or(&vec![]) {
//!     let order_id = order["id"].as_str().unwrap();
//!     acknowledgements.acknowledge_order(order_id, Some("my-order-42")).await?;
//! }
//! ```
//!
//! ## Fulfilling an Order
//!
//! ```rust,ignore
//! use facebook_commerce::{FulfillmentApi, ShipmentItem, TrackingInfo};
//!
//! let fulfillment = FulfillmentApi::new(&config);
//!
//! let items = vec![ShipmentItem {
//!     retailer_id: Some("SKU-1".to_string()),
//!     product_id: None,
//!     quantity: 1,
//! }];
//! let tracking = TrackingInfo {
//!     carrier: "FEDEX".to_string(),
//!     tracking_number: "9400100000000000000000".to_string(),
//!     shipping_method_name: Some("Standard".to_string()),
//! };
//!
//! fulfillment.attach_shipment("1320178428999123", &items, &tracking, None).await?;
//! ```
//!
//! ## Error Handling
//!
//! All endpoint methods return `Result<serde_json::Value, HttpError>`:
//!
//! ```rust,ignore
//! use facebook_commerce::HttpError;
//!
//! match orders.get_order_details("1320178428999123", None).await {
//!     Ok(order) => println!("{order}"),
//!     Err(HttpError::Response(e)) => {
//!         // e.message carries the remote error_user_msg when present,
//!         // e.g. "Bad Request: Order is already acknowledged."
//!         eprintln!("API error {}: {}", e.status, e.message);
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! Requests and responses are echoed through the [`tracing`] facade at info
//! level, with elapsed time; install any `tracing` subscriber to observe
//! them. Logging is best-effort and never affects control flow.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Configuration newtypes validate on construction
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Secure by default**: TLS certificates are verified; the opt-out is
//!   explicit and intended for test servers only

pub mod apis;
pub mod client;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiVersion, CmsId, CommerceConfig, CommerceConfigBuilder, BASE_URL,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use client::{HttpClient, HttpError, HttpMethod, HttpResponse, Params, UnexpectedResponseError};

// Re-export endpoint API types
pub use apis::{
    AcknowledgementApi, CancellationRefundApi, FulfillmentApi, ListOrdersParams, OrderApi,
    RefundItem, ReturnApi, ReturnItem, ShipmentItem, ShippingLabel, TrackingInfo,
    UpdateReturnOptions,
};
