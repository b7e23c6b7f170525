//! Statements shared by more than one repository.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::schema::{baskets, customers, product_baskets, products};

pub fn customer_exists(conn: &mut PgConnection, customer_id: i32) -> QueryResult<bool> {
    diesel::select(exists(customers::table.filter(customers::id.eq(customer_id))))
        .get_result(conn)
}

pub fn product_exists(conn: &mut PgConnection, product_id: i32) -> QueryResult<bool> {
    diesel::select(exists(products::table.filter(products::id.eq(product_id))))
        .get_result(conn)
}

/// Delete every line of the customer's basket, keeping the basket row itself.
pub fn delete_basket_lines(conn: &mut PgConnection, customer_id: i32) -> QueryResult<usize> {
    let basket_ids = baskets::table
        .filter(baskets::customer_id.eq(customer_id))
        .select(baskets::id);
    diesel::delete(product_baskets::table.filter(product_baskets::baskets_id.eq_any(basket_ids)))
        .execute(conn)
}
