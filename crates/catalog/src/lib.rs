//! `souk-catalog` — vendor-owned products and their owner-scoped CRUD service.

pub mod product;
pub mod service;

pub use product::{NewProduct, Product, ProductPatch};
pub use service::{DEFAULT_LIMIT, DEFAULT_PAGE, ProductService};
