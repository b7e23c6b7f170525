pub mod catalog_repo;
pub mod customer_repo;
pub mod models;
pub mod order_repo;
pub mod product_list_repo;
pub mod queries;

pub use catalog_repo::DieselCatalogRepository;
pub use customer_repo::DieselCustomerRepository;
pub use order_repo::DieselOrderRepository;
pub use product_list_repo::DieselProductListRepository;

use crate::domain::errors::{DomainError, StorageStage};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::storage(StorageStage::Query, e)
    }
}
