use std::sync::Arc;

use souk_auth::TokenService;
use souk_catalog::{Product, ProductService};
use souk_orders::{Order, OrderService};
use souk_store::InMemoryOwnedStore;
use souk_vendors::{CredentialService, InMemoryVendorDirectory};

/// Application services, wired once in `build_app` and shared with handlers
/// via an extension.
pub struct AppServices {
    pub credentials: CredentialService<Arc<InMemoryVendorDirectory>>,
    pub tokens: Arc<TokenService>,
    pub products: ProductService,
    pub orders: OrderService,
}

/// Construct stores and services. The signing secret and the stores are
/// explicit inputs here, never ambient globals.
pub fn build_services(jwt_secret: &str) -> AppServices {
    let directory = Arc::new(InMemoryVendorDirectory::new());
    let product_store: Arc<InMemoryOwnedStore<Product>> = Arc::new(InMemoryOwnedStore::new());
    let order_store: Arc<InMemoryOwnedStore<Order>> = Arc::new(InMemoryOwnedStore::new());

    AppServices {
        credentials: CredentialService::new(directory),
        tokens: Arc::new(TokenService::new(jwt_secret.as_bytes())),
        products: ProductService::new(product_store.clone()),
        orders: OrderService::new(order_store, product_store),
    }
}
