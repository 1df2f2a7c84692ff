//! `souk-orders` — vendor-owned orders and their owner-scoped service.

pub mod order;
pub mod service;

pub use order::{Order, OrderStatus};
pub use service::OrderService;
