use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use souk_core::{OrderId, ProductId, VendorId};
use souk_store::Document;

/// Fulfillment status. `pending` is initial; `shipped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Shipped => write!(f, "shipped"),
        }
    }
}

/// An order against a single product.
///
/// # Invariants
/// - `vendor` is denormalized from the product at creation, so ownership
///   scoping is a direct filter rather than a join through Product.
/// - `quantity` is positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub vendor: VendorId,
    pub product: ProductId,
    pub quantity: u32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Document for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}
