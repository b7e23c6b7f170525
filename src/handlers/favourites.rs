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
    path = "/api/favorites/add",
    request_body = ProductListItemRequest,
    responses(
        (status = 200, description = "Product added to favorites", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Favorites belong to another customer", body = ErrorResponse),
        (status = 404, description = "Unknown customer or product", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "favorites"
)]
pub async fn add_favourite(
    state: web::Data<AppState>,
    identity: AuthenticatedCustomer,
    body: web::Json<ProductListItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    identity.ensure_owns(body.user_id)?;

    web::block(move || state.favourites.add(body.user_id, body.product_id)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::ok(
        "Product successfully added to favorites",
    )))
}

#[utoipa::path(
    post,
    path = "/api/favorites/remove",
    request_body = ProductListItemRequest,
    responses(
        (status = 200, description = "Product removed from favorites", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Favorites belong to another customer", body = ErrorResponse),
        (status = 404, description = "Product is not in favorites", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "favorites"
)]
pub async fn remove_favourite(
    state: web::Data<AppState>,
    identity: AuthenticatedCustomer,
    body: web::Json<ProductListItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    identity.ensure_owns(body.user_id)?;

    web::block(move || state.favourites.remove(body.user_id, body.product_id)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::ok("Removed from favorites")))
}

#[utoipa::path(
    post,
    path = "/api/favorites/clear",
    request_body = ProductListOwnerRequest,
    responses(
        (status = 200, description = "Favorites emptied", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Favorites belong to another customer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "favorites"
)]
pub async fn clear_favourites(
    state: web::Data<AppState>,
    identity: AuthenticatedCustomer,
    body: web::Json<ProductListOwnerRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = body.into_inner().user_id;
    identity.ensure_owns(user_id)?;

    let cleared = web::block(move || state.favourites.clear(user_id)).await??;
    Ok(HttpResponse::Ok().json(MessageResponse::ok(format!(
        "Cleared {} items from favorites",
        cleared
    ))))
}

#[utoipa::path(
    get,
    path = "/api/favorites",
    params(
        ("user_id" = i32, Query, description = "Favorites owner"),
    ),
    responses(
        (status = 200, description = "Favourite products", body = [ProductResponse]),
        (status = 400, description = "Missing or malformed user_id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Favorites belong to another customer", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "favorites"
)]
pub async fn get_favourites(
    state: web::Data<AppState>,
    identity: AuthenticatedCustomer,
    query: web::Query<ProductListQuery>,
) -> Result<HttpResponse, AppError> {
    let user_id = query.into_inner().user_id;
    identity.ensure_owns(user_id)?;

    let products = web::block(move || state.favourites.list(user_id)).await??;
    Ok(HttpResponse::Ok().json(to_responses(products)))
}
