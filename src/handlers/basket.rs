use actix_web::{web, HttpResponse};

use crate::auth::AuthenticatedCustomer;
use crate::errors::AppError;
use crate::AppState;

use super::products::{to_responses, ProductResponse};
use super::{
    ErrorResponse, MessageResponse, ProductListItemRequest, ProductListOwnerRequest,
    ProductListQuery,
};

#[utoipa::path(
    post,
    path = "/api/basket/add",
    request_body = ProductListItemRequest,
    responses(
        (status = 200, description = "Product added to basket", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Basket belongs to another customer", body = ErrorResponse),
        (status = 404, description = "Unknown customer or product", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "basket"
)]
pub async fn add_to_basket(
    state: web::Data<AppState>,
    identity: AuthenticatedCustomer,
    body: web::Json<ProductListItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    identity.ensure_owns(body.user_id)?;

    web::block(move || state.basket.add(body.user_id, body.product_id)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::ok("Product added to basket")))
}

#[utoipa::path(
    post,
    path = "/api/basket/remove",
    request_body = ProductListItemRequest,
    responses(
        (status = 200, description = "Product removed from basket", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Basket belongs to another customer", body = ErrorResponse),
        (status = 404, description = "Product is not in the basket", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "basket"
)]
pub async fn remove_from_basket(
    state: web::Data<AppState>,
    identity: AuthenticatedCustomer,
    body: web::Json<ProductListItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    identity.ensure_owns(body.user_id)?;

    web::block(move || state.basket.remove(body.user_id, body.product_id)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::ok("Product removed from basket")))
}

#[utoipa::path(
    post,
    path = "/api/basket/clear",
    request_body = ProductListOwnerRequest,
    responses(
        (status = 200, description = "Basket emptied", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Basket belongs to another customer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "basket"
)]
pub async fn clear_basket(
    state: web::Data<AppState>,
    identity: AuthenticatedCustomer,
    body: web::Json<ProductListOwnerRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = body.into_inner().user_id;
    identity.ensure_owns(user_id)?;

    let cleared = web::block(move || state.basket.clear(user_id)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::ok(format!(
        "Cleared {} items from basket",
        cleared
    ))))
}

#[utoipa::path(
    get,
    path = "/api/basket",
    params(
        ("user_id" = i32, Query, description = "Basket owner"),
    ),
    responses(
        (status = 200, description = "Products in the basket", body = [ProductResponse]),
        (status = 400, description = "Missing or malformed user_id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Basket belongs to another customer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "basket"
)]
pub async fn get_basket(
    state: web::Data<AppState>,
    identity: AuthenticatedCustomer,
    query: web::Query<ProductListQuery>,
) -> Result<HttpResponse, AppError> {
    let user_id = query.into_inner().user_id;
    identity.ensure_owns(user_id)?;

    let products = web::block(move || state.basket.list(user_id)).await??;
    Ok(HttpResponse::Ok().json(to_responses(products)))
}
