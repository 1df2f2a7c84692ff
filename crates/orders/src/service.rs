use std::sync::Arc;

use chrono::Utc;

use souk_catalog::Product;
use souk_core::{DomainError, DomainResult, OrderId, ProductId, VendorId};
use souk_store::OwnedStore;

use crate::{Order, OrderStatus};

/// Owner-scoped order operations.
pub struct OrderService {
    orders: Arc<dyn OwnedStore<Order>>,
    products: Arc<dyn OwnedStore<Product>>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OwnedStore<Order>>, products: Arc<dyn OwnedStore<Product>>) -> Self {
        Self { orders, products }
    }

    /// Place an order against one of the caller's own products.
    ///
    /// The order's owner is copied from the product here and never changes
    /// afterwards. A foreign or unknown product id fails with `NotFound`.
    pub fn create(
        &self,
        vendor_id: VendorId,
        product_id: ProductId,
        quantity: u32,
    ) -> DomainResult<Order> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        let product = self
            .products
            .get(vendor_id, product_id)
            .ok_or(DomainError::NotFound)?;

        let order = Order {
            id: OrderId::new(),
            vendor: product.vendor,
            product: product.id,
            quantity,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };
        self.orders.insert(order.vendor, order.clone())?;

        tracing::debug!(vendor_id = %vendor_id, order_id = %order.id, "order created");
        Ok(order)
    }

    /// The vendor's orders in insertion order, each with its product
    /// resolved. A product deleted after the order was placed resolves to
    /// `None`.
    pub fn list(&self, vendor_id: VendorId) -> Vec<(Order, Option<Product>)> {
        self.orders
            .list(vendor_id, 0, usize::MAX)
            .into_iter()
            .map(|order| {
                let product = self.products.get(vendor_id, order.product);
                (order, product)
            })
            .collect()
    }

    /// Set `status = shipped` unconditionally via atomic find-and-update.
    ///
    /// Re-shipping a shipped order re-confirms `shipped` rather than
    /// erroring; ownership-scoped `NotFound` otherwise.
    pub fn mark_shipped(&self, vendor_id: VendorId, order_id: OrderId) -> DomainResult<Order> {
        self.orders
            .find_and_update(vendor_id, order_id, &|o| o.status = OrderStatus::Shipped)?
            .ok_or(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use souk_store::InMemoryOwnedStore;

    use super::*;

    struct Fixture {
        service: OrderService,
        products: Arc<InMemoryOwnedStore<Product>>,
    }

    fn fixture() -> Fixture {
        let products: Arc<InMemoryOwnedStore<Product>> = Arc::new(InMemoryOwnedStore::new());
        let orders: Arc<InMemoryOwnedStore<Order>> = Arc::new(InMemoryOwnedStore::new());
        Fixture {
            service: OrderService::new(orders, products.clone()),
            products,
        }
    }

    fn seed_product(products: &InMemoryOwnedStore<Product>, vendor: VendorId) -> Product {
        let product = Product {
            id: ProductId::new(),
            name: "Widget".to_string(),
            price: Decimal::new(999, 2),
            stock: 5,
            vendor,
        };
        products.insert(vendor, product.clone()).unwrap();
        product
    }

    #[test]
    fn create_denormalizes_owner_from_product() {
        let fx = fixture();
        let vendor = VendorId::new();
        let product = seed_product(&fx.products, vendor);

        let order = fx.service.create(vendor, product.id, 2).unwrap();
        assert_eq!(order.vendor, vendor);
        assert_eq!(order.product, product.id);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn create_rejects_zero_quantity_and_foreign_products() {
        let fx = fixture();
        let owner = VendorId::new();
        let other = VendorId::new();
        let product = seed_product(&fx.products, owner);

        assert!(matches!(
            fx.service.create(owner, product.id, 0),
            Err(DomainError::Validation(_))
        ));
        // Another vendor cannot order against this product id.
        assert_eq!(
            fx.service.create(other, product.id, 1),
            Err(DomainError::NotFound)
        );
        assert_eq!(
            fx.service.create(owner, ProductId::new(), 1),
            Err(DomainError::NotFound)
        );
    }

    #[test]
    fn list_embeds_the_referenced_product() {
        let fx = fixture();
        let vendor = VendorId::new();
        let product = seed_product(&fx.products, vendor);
        let order = fx.service.create(vendor, product.id, 3).unwrap();

        let listed = fx.service.list(vendor);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, order);
        assert_eq!(listed[0].1.as_ref(), Some(&product));
    }

    #[test]
    fn list_is_owner_scoped_and_tolerates_deleted_products() {
        let fx = fixture();
        let v1 = VendorId::new();
        let v2 = VendorId::new();
        let product = seed_product(&fx.products, v1);
        fx.service.create(v1, product.id, 1).unwrap();

        assert!(fx.service.list(v2).is_empty());

        fx.products.find_and_delete(v1, product.id).unwrap().unwrap();
        let listed = fx.service.list(v1);
        assert_eq!(listed.len(), 1);
        assert!(listed[0].1.is_none());
    }

    #[test]
    fn mark_shipped_is_idempotent_in_effect() {
        let fx = fixture();
        let vendor = VendorId::new();
        let product = seed_product(&fx.products, vendor);
        let order = fx.service.create(vendor, product.id, 1).unwrap();

        let first = fx.service.mark_shipped(vendor, order.id).unwrap();
        assert_eq!(first.status, OrderStatus::Shipped);

        // Second call succeeds and re-confirms shipped.
        let second = fx.service.mark_shipped(vendor, order.id).unwrap();
        assert_eq!(second.status, OrderStatus::Shipped);
    }

    #[test]
    fn mark_shipped_is_owner_scoped() {
        let fx = fixture();
        let owner = VendorId::new();
        let other = VendorId::new();
        let product = seed_product(&fx.products, owner);
        let order = fx.service.create(owner, product.id, 1).unwrap();

        assert_eq!(
            fx.service.mark_shipped(other, order.id),
            Err(DomainError::NotFound)
        );
        // Untouched for the owner.
        let listed = fx.service.list(owner);
        assert_eq!(listed[0].0.status, OrderStatus::Pending);
    }
}
