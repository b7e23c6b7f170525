use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::product::ProductView;
use crate::errors::AppError;
use crate::AppState;

use super::ErrorResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub manufacturer: String,
    /// Price as a JSON number, e.g. 19.99
    #[serde(serialize_with = "bigdecimal::serde::json_num::serialize")]
    #[schema(value_type = f64)]
    pub price: bigdecimal::BigDecimal,
    pub image_url: String,
    pub description: String,
    pub category_id: i32,
    pub stock_quantity: i32,
}

impl From<ProductView> for ProductResponse {
    fn from(p: ProductView) -> Self {
        Self {
            id: p.id,
            name: p.name,
            manufacturer: p.manufacturer,
            price: p.price,
            image_url: p.image_url,
            description: p.description,
            category_id: p.category_id,
            stock_quantity: p.stock_quantity,
        }
    }
}

pub(crate) fn to_responses(products: Vec<ProductView>) -> Vec<ProductResponse> {
    products.into_iter().map(ProductResponse::from).collect()
}

/// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = [ProductResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "products"
)]
pub async fn list_products(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let products = web::block(move || state.catalog.list_products()).await??;
    Ok(HttpResponse::Ok().json(to_responses(products)))
}

/// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id"),
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "products"
)]
pub async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let product = web::block(move || state.catalog.get_product(id)).await??;
    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// GET /api/products/category/{category_id}
#[utoipa::path(
    get,
    path = "/api/products/category/{category_id}",
    params(
        ("category_id" = i32, Path, description = "Category id"),
    ),
    responses(
        (status = 200, description = "Products of the category", body = [ProductResponse]),
        (status = 400, description = "Malformed category id", body = ErrorResponse),
        (status = 404, description = "Category has no products", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "products"
)]
pub async fn products_by_category(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let category_id = path.into_inner();
    let products = web::block(move || state.catalog.products_by_category(category_id)).await??;
    Ok(HttpResponse::Ok().json(to_responses(products)))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::*;

    #[test]
    fn price_is_serialized_as_a_json_number() {
        let response = ProductResponse::from(ProductView {
            id: 3,
            name: "Ball".to_string(),
            manufacturer: "Acme".to_string(),
            price: BigDecimal::from_str("19.99").unwrap(),
            image_url: String::new(),
            description: String::new(),
            category_id: 1,
            stock_quantity: 5,
        });

        let json = serde_json::to_value(&response).unwrap();

        assert!(json["price"].is_number());
        assert_eq!(json["price"].as_f64(), Some(19.99));
        assert_eq!(json["stock_quantity"], 5);
    }
}
