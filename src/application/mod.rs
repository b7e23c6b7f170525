pub mod auth_service;
pub mod catalog_service;
pub mod order_service;
pub mod product_list_service;

pub use auth_service::{AuthService, AuthSession};
pub use catalog_service::CatalogService;
pub use order_service::OrderService;
pub use product_list_service::ProductListService;
