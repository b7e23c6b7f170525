use diesel::prelude::*;

use crate::db::{checkout, DbPool};
use crate::domain::errors::{DomainError, StorageStage};
use crate::domain::order::{AddressInput, NewDelivery, NewOrder};
use crate::domain::ports::{OrderRepository, OrderUnitOfWork};
use crate::schema::{addresses, deliveries, orders, product_order};

use super::models::{NewAddressRow, NewDeliveryRow, NewOrderLineRow, NewOrderRow};
use super::queries;

// ── Transaction plumbing ─────────────────────────────────────────────────────

/// Keeps step failures apart from begin/commit failures raised by diesel.
enum TxError {
    Work(DomainError),
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for TxError {
    fn from(e: diesel::result::Error) -> Self {
        TxError::Diesel(e)
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn OrderUnitOfWork) -> Result<T, DomainError>,
    {
        let mut pooled = checkout(&self.pool)?;
        let conn: &mut PgConnection = &mut pooled;

        // diesel rolls back when the closure returns Err. If it unwinds instead,
        // the connection is flagged broken and r2d2 drops it, which makes
        // PostgreSQL discard the open transaction.
        conn.transaction::<T, TxError, _>(|conn| {
            let mut uow = DieselOrderUnitOfWork { conn };
            work(&mut uow).map_err(TxError::Work)
        })
        .map_err(|e| match e {
            TxError::Work(e) => e,
            TxError::Diesel(e) => DomainError::storage(StorageStage::Transaction, e),
        })
    }
}

struct DieselOrderUnitOfWork<'a> {
    conn: &'a mut PgConnection,
}

impl OrderUnitOfWork for DieselOrderUnitOfWork<'_> {
    fn customer_exists(&mut self, customer_id: i32) -> Result<bool, DomainError> {
        queries::customer_exists(self.conn, customer_id)
            .map_err(|e| DomainError::storage(StorageStage::CustomerLookup, e))
    }

    fn insert_address(
        &mut self,
        customer_id: i32,
        address: &AddressInput,
    ) -> Result<i32, DomainError> {
        diesel::insert_into(addresses::table)
            .values(&NewAddressRow {
                customer_id,
                country: &address.country,
                city: &address.city,
                street: &address.street,
                house: address.house,
                apartment: address.apartment,
            })
            .returning(addresses::id)
            .get_result(self.conn)
            .map_err(|e| DomainError::storage(StorageStage::Address, e))
    }

    fn insert_order(&mut self, order: &NewOrder) -> Result<i32, DomainError> {
        diesel::insert_into(orders::table)
            .values(&NewOrderRow {
                customer_id: order.customer_id,
                order_price: order.order_price.clone(),
                card_number: &order.card_number,
                order_date: order.placed_at,
            })
            .returning(orders::id)
            .get_result(self.conn)
            .map_err(|e| DomainError::storage(StorageStage::Order, e))
    }

    fn insert_order_lines(
        &mut self,
        order_id: i32,
        product_ids: &[i32],
    ) -> Result<usize, DomainError> {
        let rows: Vec<NewOrderLineRow> = product_ids
            .iter()
            .map(|&product_id| NewOrderLineRow {
                product_id,
                order_id,
            })
            .collect();
        diesel::insert_into(product_order::table)
            .values(&rows)
            .execute(self.conn)
            .map_err(|e| DomainError::storage(StorageStage::OrderLines, e))
    }

    fn insert_delivery(&mut self, delivery: &NewDelivery) -> Result<i32, DomainError> {
        diesel::insert_into(deliveries::table)
            .values(&NewDeliveryRow {
                order_id: delivery.order_id,
                address_id: delivery.address_id,
                status: delivery.status.as_str(),
                expected_receive_date: delivery.expected_receive_at,
            })
            .returning(deliveries::id)
            .get_result(self.conn)
            .map_err(|e| DomainError::storage(StorageStage::Delivery, e))
    }

    fn clear_basket(&mut self, customer_id: i32) -> Result<usize, DomainError> {
        queries::delete_basket_lines(self.conn, customer_id)
            .map_err(|e| DomainError::storage(StorageStage::BasketClear, e))
    }
}
