use diesel::prelude::*;

use crate::db::{checkout, DbPool};
use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogRepository;
use crate::domain::product::ProductView;
use crate::schema::{manufacturers, products};

use super::models::{ProductRow, PRODUCT_COLUMNS};

pub struct DieselCatalogRepository {
    pool: DbPool,
}

impl DieselCatalogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CatalogRepository for DieselCatalogRepository {
    fn list(&self) -> Result<Vec<ProductView>, DomainError> {
        let mut conn = checkout(&self.pool)?;
        let rows = products::table
            .inner_join(manufacturers::table)
            .select(PRODUCT_COLUMNS)
            .order(products::id.asc())
            .load::<ProductRow>(&mut conn)?;
        Ok(rows.into_iter().map(ProductView::from).collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<ProductView>, DomainError> {
        let mut conn = checkout(&self.pool)?;
        let row = products::table
            .inner_join(manufacturers::table)
            .filter(products::id.eq(id))
            .select(PRODUCT_COLUMNS)
            .first::<ProductRow>(&mut conn)
            .optional()?;
        Ok(row.map(ProductView::from))
    }

    fn list_by_category(&self, category_id: i32) -> Result<Vec<ProductView>, DomainError> {
        let mut conn = checkout(&self.pool)?;
        let rows = products::table
            .inner_join(manufacturers::table)
            .filter(products::category_id.eq(category_id))
            .select(PRODUCT_COLUMNS)
            .order(products::id.asc())
            .load::<ProductRow>(&mut conn)?;
        Ok(rows.into_iter().map(ProductView::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::DieselCatalogRepository;
    use crate::domain::ports::CatalogRepository;
    use crate::infrastructure::testing::{seed_product, setup_db};

    #[tokio::test]
    async fn list_joins_manufacturer_name() {
        let (_container, pool) = setup_db().await;
        let ball = seed_product(&pool, "Ball", 1);
        seed_product(&pool, "Boots", 2);
        let repo = DieselCatalogRepository::new(pool);

        let products = repo.list().expect("list failed");

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ball);
        assert_eq!(products[0].manufacturer, "Acme");
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let (_container, pool) = setup_db().await;
        let repo = DieselCatalogRepository::new(pool);

        assert!(repo.find_by_id(12345).expect("find failed").is_none());
    }

    #[tokio::test]
    async fn list_by_category_filters() {
        let (_container, pool) = setup_db().await;
        seed_product(&pool, "Ball", 1);
        let boots = seed_product(&pool, "Boots", 2);
        let repo = DieselCatalogRepository::new(pool);

        let products = repo.list_by_category(2).expect("list failed");

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, boots);
        assert!(repo.list_by_category(3).expect("list failed").is_empty());
    }
}
