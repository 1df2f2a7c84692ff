use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use souk_core::{DomainError, DomainResult, ProductId, VendorId};
use souk_store::Document;

/// A catalog product owned by exactly one vendor.
///
/// # Invariants
/// - `vendor` is set at creation and never reassigned.
/// - `price` is non-negative; `stock` is a non-negative count.
/// - Deletion is permanent removal (no soft delete).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
    pub vendor: VendorId,
}

impl Document for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Validated input for creating a product. Carries no vendor field; ownership
/// comes from the authenticated caller alone.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl NewProduct {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if self.price.is_sign_negative() {
            return Err(DomainError::validation("price must be non-negative"));
        }
        Ok(())
    }
}

/// Partial update. Has no vendor field, so ownership can never be patched.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<u32>,
}

impl ProductPatch {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name must not be empty"));
            }
        }
        if let Some(price) = self.price {
            if price.is_sign_negative() {
                return Err(DomainError::validation("price must be non-negative"));
            }
        }
        Ok(())
    }

    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.trim().to_string();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}
