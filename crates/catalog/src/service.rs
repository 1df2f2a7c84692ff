use std::sync::Arc;

use souk_core::{DomainError, DomainResult, ProductId, VendorId};
use souk_store::OwnedStore;

use crate::{NewProduct, Product, ProductPatch};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Owner-scoped product CRUD.
///
/// Every operation takes the authenticated vendor as an implicit scope. An id
/// belonging to another vendor behaves exactly like a nonexistent id, so no
/// operation can leak the existence of foreign products.
pub struct ProductService {
    store: Arc<dyn OwnedStore<Product>>,
}

impl ProductService {
    pub fn new(store: Arc<dyn OwnedStore<Product>>) -> Self {
        Self { store }
    }

    pub fn create(&self, vendor_id: VendorId, input: NewProduct) -> DomainResult<Product> {
        input.validate()?;

        let product = Product {
            id: ProductId::new(),
            name: input.name.trim().to_string(),
            price: input.price,
            stock: input.stock,
            vendor: vendor_id,
        };
        self.store.insert(vendor_id, product.clone())?;

        tracing::debug!(vendor_id = %vendor_id, product_id = %product.id, "product created");
        Ok(product)
    }

    /// One page of the vendor's products in insertion order.
    ///
    /// `page` and `limit` default to 1 and 10; each call computes a fresh
    /// page, no cursor state is kept between calls.
    pub fn list(
        &self,
        vendor_id: VendorId,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> Vec<Product> {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        // page and limit are client-supplied; the offset must not overflow.
        let skip = page.saturating_sub(1).saturating_mul(limit);
        self.store.list(vendor_id, skip, limit)
    }

    pub fn get(&self, vendor_id: VendorId, product_id: ProductId) -> DomainResult<Product> {
        self.store
            .get(vendor_id, product_id)
            .ok_or(DomainError::NotFound)
    }

    /// Apply a partial update atomically via the store's find-and-update.
    pub fn update(
        &self,
        vendor_id: VendorId,
        product_id: ProductId,
        patch: ProductPatch,
    ) -> DomainResult<Product> {
        patch.validate()?;
        self.store
            .find_and_update(vendor_id, product_id, &|p| patch.apply(p))?
            .ok_or(DomainError::NotFound)
    }

    /// Atomic find-and-remove filtered by both id and owner.
    pub fn delete(&self, vendor_id: VendorId, product_id: ProductId) -> DomainResult<()> {
        self.store
            .find_and_delete(vendor_id, product_id)?
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }
}
