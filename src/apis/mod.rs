//! Endpoint APIs for the Commerce Platform order-management surface.
//!
//! Each sub-module wraps one remote API area, mirroring the platform's own
//! grouping of its order-management documentation:
//!
//! - [`orders::OrderApi`]: listing orders and fetching order details
//! - [`acknowledgement::AcknowledgementApi`]: app association and order
//!   acknowledgement
//! - [`fulfillment::FulfillmentApi`]: attaching shipments to orders
//! - [`cancellation::CancellationRefundApi`]: cancelling and refunding orders
//! - [`returns::ReturnApi`]: creating and updating returns
//!
//! Every method performs exactly one HTTP round trip through the shared
//! [`crate::client::HttpClient`] pipeline and returns the parsed JSON body as
//! a [`serde_json::Value`]. No response-shape validation is performed beyond
//! what is documented per method; callers are expected to know the remote
//! schema per operation.
//!
//! Mutating calls that the remote service deduplicates attach a freshly
//! generated idempotency key, never reused and never persisted by this
//! library.

pub mod acknowledgement;
pub mod cancellation;
pub mod fulfillment;
pub mod orders;
pub mod returns;

pub use acknowledgement::AcknowledgementApi;
pub use cancellation::{CancellationRefundApi, RefundItem};
pub use fulfillment::{FulfillmentApi, ShipmentItem, TrackingInfo};
pub use orders::{ListOrdersParams, OrderApi};
pub use returns::{ReturnApi, ReturnItem, ShippingLabel, UpdateReturnOptions};

/// Generates a fresh idempotency key for a mutating call.
pub(crate) fn idempotency_key() -> String {
    uuid::Uuid::new_v4().to_string()
}
