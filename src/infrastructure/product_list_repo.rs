use diesel::prelude::*;
use diesel::upsert::excluded;

use crate::db::{checkout, DbPool};
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductListRepository;
use crate::domain::product::{ProductListKind, ProductView};
use crate::schema::{baskets, favourites, manufacturers, product_baskets, product_favourites, products};

use super::models::{ProductRow, PRODUCT_COLUMNS};
use super::queries;

/// Basket or favourites storage: a per-customer header row plus one
/// association row per product.
pub struct DieselProductListRepository {
    pool: DbPool,
    kind: ProductListKind,
}

impl DieselProductListRepository {
    pub fn basket(pool: DbPool) -> Self {
        Self {
            pool,
            kind: ProductListKind::Basket,
        }
    }

    pub fn favourites(pool: DbPool) -> Self {
        Self {
            pool,
            kind: ProductListKind::Favourites,
        }
    }
}

impl ProductListRepository for DieselProductListRepository {
    fn kind(&self) -> ProductListKind {
        self.kind
    }

    fn add(&self, customer_id: i32, product_id: i32) -> Result<(), DomainError> {
        let mut conn = checkout(&self.pool)?;

        if !queries::customer_exists(&mut conn, customer_id)? {
            return Err(DomainError::NotFound(format!(
                "User with ID {} does not exist",
                customer_id
            )));
        }
        if !queries::product_exists(&mut conn, product_id)? {
            return Err(DomainError::NotFound(format!(
                "Product with ID {} does not exist",
                product_id
            )));
        }

        conn.transaction::<_, DomainError, _>(|conn| {
            match self.kind {
                ProductListKind::Basket => {
                    let basket_id: i32 = diesel::insert_into(baskets::table)
                        .values(baskets::customer_id.eq(customer_id))
                        .on_conflict(baskets::customer_id)
                        .do_update()
                        .set(baskets::customer_id.eq(excluded(baskets::customer_id)))
                        .returning(baskets::id)
                        .get_result(conn)?;
                    diesel::insert_into(product_baskets::table)
                        .values((
                            product_baskets::product_id.eq(product_id),
                            product_baskets::baskets_id.eq(basket_id),
                        ))
                        .on_conflict_do_nothing()
                        .execute(conn)?;
                }
                ProductListKind::Favourites => {
                    let favourites_id: i32 = diesel::insert_into(favourites::table)
                        .values(favourites::customer_id.eq(customer_id))
                        .on_conflict(favourites::customer_id)
                        .do_update()
                        .set(favourites::customer_id.eq(excluded(favourites::customer_id)))
                        .returning(favourites::id)
                        .get_result(conn)?;
                    diesel::insert_into(product_favourites::table)
                        .values((
                            product_favourites::product_id.eq(product_id),
                            product_favourites::favourites_id.eq(favourites_id),
                        ))
                        .on_conflict_do_nothing()
                        .execute(conn)?;
                }
            }
            Ok(())
        })
    }

    fn remove(&self, customer_id: i32, product_id: i32) -> Result<bool, DomainError> {
        let mut conn = checkout(&self.pool)?;
        let deleted = match self.kind {
            ProductListKind::Basket => {
                let owner = baskets::table
                    .filter(baskets::customer_id.eq(customer_id))
                    .select(baskets::id);
                diesel::delete(
                    product_baskets::table
                        .filter(product_baskets::baskets_id.eq_any(owner))
                        .filter(product_baskets::product_id.eq(product_id)),
                )
                .execute(&mut conn)?
            }
            ProductListKind::Favourites => {
                let owner = favourites::table
                    .filter(favourites::customer_id.eq(customer_id))
                    .select(favourites::id);
                diesel::delete(
                    product_favourites::table
                        .filter(product_favourites::favourites_id.eq_any(owner))
                        .filter(product_favourites::product_id.eq(product_id)),
                )
                .execute(&mut conn)?
            }
        };
        Ok(deleted > 0)
    }

    fn list(&self, customer_id: i32) -> Result<Vec<ProductView>, DomainError> {
        let mut conn = checkout(&self.pool)?;
        let rows = match self.kind {
            ProductListKind::Basket => product_baskets::table
                .inner_join(products::table.inner_join(manufacturers::table))
                .inner_join(baskets::table)
                .filter(baskets::customer_id.eq(customer_id))
                .select(PRODUCT_COLUMNS)
                .order(products::id.asc())
                .load::<ProductRow>(&mut conn)?,
            ProductListKind::Favourites => product_favourites::table
                .inner_join(products::table.inner_join(manufacturers::table))
                .inner_join(favourites::table)
                .filter(favourites::customer_id.eq(customer_id))
                .select(PRODUCT_COLUMNS)
                .order(products::id.asc())
                .load::<ProductRow>(&mut conn)?,
        };
        Ok(rows.into_iter().map(ProductView::from).collect())
    }

    fn clear(&self, customer_id: i32) -> Result<usize, DomainError> {
        let mut conn = checkout(&self.pool)?;
        let deleted = match self.kind {
            ProductListKind::Basket => queries::delete_basket_lines(&mut conn, customer_id)?,
            ProductListKind::Favourites => {
                let owner = favourites::table
                    .filter(favourites::customer_id.eq(customer_id))
                    .select(favourites::id);
                diesel::delete(
                    product_favourites::table.filter(product_favourites::favourites_id.eq_any(owner)),
                )
                .execute(&mut conn)?
            }
        };
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::DieselProductListRepository;
    use crate::domain::errors::DomainError;
    use crate::domain::ports::ProductListRepository;
    use crate::infrastructure::testing::{seed_customer, seed_product, setup_db};

    #[tokio::test]
    async fn add_is_idempotent() {
        let (_container, pool) = setup_db().await;
        let customer_id = seed_customer(&pool, "buyer");
        let product = seed_product(&pool, "Ball", 1);
        let basket = DieselProductListRepository::basket(pool);

        basket.add(customer_id, product).expect("first add failed");
        basket.add(customer_id, product).expect("second add failed");

        assert_eq!(basket.list(customer_id).expect("list failed").len(), 1);
    }

    #[tokio::test]
    async fn add_rejects_unknown_customer_and_product() {
        let (_container, pool) = setup_db().await;
        let customer_id = seed_customer(&pool, "buyer");
        let product = seed_product(&pool, "Ball", 1);
        let favourites = DieselProductListRepository::favourites(pool);

        let err = favourites.add(999, product).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        let err = favourites.add(customer_id, 999).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn remove_reports_missing_products() {
        let (_container, pool) = setup_db().await;
        let customer_id = seed_customer(&pool, "buyer");
        let product = seed_product(&pool, "Ball", 1);
        let favourites = DieselProductListRepository::favourites(pool);

        favourites.add(customer_id, product).expect("add failed");
        assert!(favourites.remove(customer_id, product).expect("remove failed"));
        assert!(!favourites.remove(customer_id, product).expect("remove failed"));
    }

    #[tokio::test]
    async fn basket_and_favourites_are_separate() {
        let (_container, pool) = setup_db().await;
        let customer_id = seed_customer(&pool, "buyer");
        let ball = seed_product(&pool, "Ball", 1);
        let boots = seed_product(&pool, "Boots", 1);
        let basket = DieselProductListRepository::basket(pool.clone());
        let favourites = DieselProductListRepository::favourites(pool);

        basket.add(customer_id, ball).expect("add failed");
        favourites.add(customer_id, boots).expect("add failed");

        let in_basket = basket.list(customer_id).expect("list failed");
        let in_favourites = favourites.list(customer_id).expect("list failed");
        assert_eq!(in_basket.len(), 1);
        assert_eq!(in_basket[0].id, ball);
        assert_eq!(in_favourites.len(), 1);
        assert_eq!(in_favourites[0].id, boots);
    }

    #[tokio::test]
    async fn clear_empties_only_the_owners_list() {
        let (_container, pool) = setup_db().await;
        let alice = seed_customer(&pool, "alice");
        let bob = seed_customer(&pool, "bob");
        let ball = seed_product(&pool, "Ball", 1);
        let boots = seed_product(&pool, "Boots", 1);
        let basket = DieselProductListRepository::basket(pool);

        basket.add(alice, ball).expect("add failed");
        basket.add(alice, boots).expect("add failed");
        basket.add(bob, ball).expect("add failed");

        assert_eq!(basket.clear(alice).expect("clear failed"), 2);
        assert_eq!(basket.clear(alice).expect("clear failed"), 0);
        assert!(basket.list(alice).expect("list failed").is_empty());
        assert_eq!(basket.list(bob).expect("list failed").len(), 1);
    }
}
