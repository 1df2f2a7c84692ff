use axum::Router;

pub mod orders;
pub mod products;
pub mod system;
pub mod vendors;

/// Router for all authenticated (vendor-scoped) endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/orders", orders::router())
}
