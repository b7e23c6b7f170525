pub mod auth;
pub mod basket;
pub mod favourites;
pub mod orders;
pub mod products;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic success envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Body of the add and remove endpoints of basket and favourites.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductListItemRequest {
    pub user_id: i32,
    pub product_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductListOwnerRequest {
    pub user_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductListQuery {
    pub user_id: i32,
}
