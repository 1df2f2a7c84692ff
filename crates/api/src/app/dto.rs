use rust_decimal::Decimal;
use serde::Deserialize;

use souk_catalog::{NewProduct, Product, ProductPatch};
use souk_core::{DomainError, DomainResult};
use souk_orders::Order;

// -------------------------
// Request DTOs + validation
// -------------------------
// Typed request bodies with explicit `validate`/conversion functions; every
// rule failure surfaces as `DomainError::Validation` before any store call.

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if !self.email.contains('@') {
            return Err(DomainError::validation("email must be a valid address"));
        }
        if self.password.len() < 6 {
            return Err(DomainError::validation(
                "password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> DomainResult<()> {
        if self.email.trim().is_empty() {
            return Err(DomainError::validation("email is required"));
        }
        if self.password.is_empty() {
            return Err(DomainError::validation("password is required"));
        }
        Ok(())
    }
}

/// Create-product body. A `vendor` key in the payload is not representable
/// here and is silently dropped by deserialization; ownership comes from the
/// token alone.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    pub stock: i64,
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> DomainResult<NewProduct> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if self.price.is_sign_negative() {
            return Err(DomainError::validation("price must be non-negative"));
        }
        let stock = u32::try_from(self.stock)
            .map_err(|_| DomainError::validation("stock must be a non-negative integer"))?;

        Ok(NewProduct {
            name: self.name,
            price: self.price,
            stock,
        })
    }
}

/// Partial-update body; absent fields are left untouched. As with create,
/// a `vendor` key cannot be expressed.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
}

impl UpdateProductRequest {
    pub fn into_patch(self) -> DomainResult<ProductPatch> {
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
        let stock = match self.stock {
            Some(s) => Some(
                u32::try_from(s)
                    .map_err(|_| DomainError::validation("stock must be a non-negative integer"))?,
            ),
            None => None,
        };

        Ok(ProductPatch {
            name: self.name,
            price: self.price,
            stock,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub product_id: String,
    pub quantity: i64,
}

impl CreateOrderRequest {
    pub fn quantity(&self) -> DomainResult<u32> {
        match u32::try_from(self.quantity) {
            Ok(q) if q > 0 => Ok(q),
            _ => Err(DomainError::validation("quantity must be a positive integer")),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id.to_string(),
        "name": p.name,
        "price": p.price,
        "stock": p.stock,
        "vendor": p.vendor.to_string(),
    })
}

pub fn order_to_json(order: Order, product: Option<Product>) -> serde_json::Value {
    serde_json::json!({
        "id": order.id.to_string(),
        "vendor": order.vendor.to_string(),
        // The id survives even when the embedded product has been deleted.
        "product_id": order.product.to_string(),
        "quantity": order.quantity,
        "status": order.status.to_string(),
        "created_at": order.created_at.to_rfc3339(),
        "product": product.map(product_to_json),
    })
}
