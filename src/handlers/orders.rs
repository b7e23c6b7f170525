use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::AuthenticatedCustomer;
use crate::domain::order::{AddressInput, PlaceOrderRequest};
use crate::errors::AppError;
use crate::AppState;

use super::ErrorResponse;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AddressRequest {
    pub country: String,
    pub city: String,
    pub street: String,
    pub house: i32,
    pub apartment: i32,
}

/// Missing `customer_id` or `products` is reported as a validation error
/// rather than a JSON decoding error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub customer_id: i32,
    /// Decimal total as computed by the storefront, e.g. 59.97
    #[serde(default)]
    #[schema(value_type = f64)]
    pub order_price: BigDecimal,
    #[serde(default)]
    pub card_number: String,
    /// Product ids, one per order line; duplicates are kept
    #[serde(default)]
    pub products: Vec<i32>,
    #[serde(default)]
    pub address: AddressRequest,
}

impl From<CreateOrderRequest> for PlaceOrderRequest {
    fn from(r: CreateOrderRequest) -> Self {
        PlaceOrderRequest {
            customer_id: r.customer_id,
            order_price: r.order_price,
            card_number: r.card_number,
            products: r.products,
            address: AddressInput {
                country: r.address.country,
                city: r.address.city,
                street: r.address.street,
                house: r.address.house,
                apartment: r.address.apartment,
            },
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub message: String,
    pub order_id: i32,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /api/orders
///
/// Checks out the caller's basket. Address, order, order lines and delivery
/// are written and the basket is emptied in one database transaction.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = CreateOrderResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Order for another customer", body = ErrorResponse),
        (status = 404, description = "Unknown customer", body = ErrorResponse),
        (status = 500, description = "A storage stage failed; nothing was written", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "orders"
)]
pub async fn create_order(
    state: web::Data<AppState>,
    identity: AuthenticatedCustomer,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let request = PlaceOrderRequest::from(body.into_inner());
    request.validate()?;
    identity.ensure_owns(request.customer_id)?;

    let order_id = web::block(move || state.orders.place_order(request)).await??;

    Ok(HttpResponse::Created().json(CreateOrderResponse {
        success: true,
        message: "Order created successfully".to_string(),
        order_id,
    }))
}
