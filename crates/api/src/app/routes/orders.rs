use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use souk_core::{OrderId, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::VendorContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", put(ship_order))
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(vendor): Extension<VendorContext>,
) -> axum::response::Response {
    let items = services
        .orders
        .list(vendor.vendor_id())
        .into_iter()
        .map(|(order, product)| dto::order_to_json(order, product))
        .collect::<Vec<_>>();

    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(vendor): Extension<VendorContext>,
    Json(body): Json<dto::CreateOrderRequest>,
) -> axum::response::Response {
    let quantity = match body.quantity() {
        Ok(q) => q,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let product_id: ProductId = match body.product_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.orders.create(vendor.vendor_id(), product_id, quantity) {
        Ok(order) => {
            let product = services.products.get(vendor.vendor_id(), order.product).ok();
            (StatusCode::CREATED, Json(dto::order_to_json(order, product))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn ship_order(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(vendor): Extension<VendorContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let order_id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.orders.mark_shipped(vendor.vendor_id(), order_id) {
        Ok(order) => {
            let product = services.products.get(vendor.vendor_id(), order.product).ok();
            (StatusCode::OK, Json(dto::order_to_json(order, product))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
