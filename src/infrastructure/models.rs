use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::customer::Customer;
use crate::domain::product::ProductView;
use crate::schema::{addresses, customers, deliveries, manufacturers, orders, product_order, products};

#[derive(Debug, Insertable)]
#[diesel(table_name = addresses)]
pub struct NewAddressRow<'a> {
    pub customer_id: i32,
    pub country: &'a str,
    pub city: &'a str,
    pub street: &'a str,
    pub house: i32,
    pub apartment: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub customer_id: i32,
    pub order_price: BigDecimal,
    pub card_number: &'a str,
    pub order_date: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = product_order)]
pub struct NewOrderLineRow {
    pub product_id: i32,
    pub order_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = deliveries)]
pub struct NewDeliveryRow<'a> {
    pub order_id: i32,
    pub address_id: i32,
    pub status: &'a str,
    pub expected_receive_date: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow<'a> {
    pub name: &'a str,
    pub surname: &'a str,
    pub patronymic: &'a str,
    pub telephone: &'a str,
    pub login: &'a str,
    pub password_hash: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub login: String,
    pub password_hash: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.name,
            surname: row.surname,
            login: row.login,
            password_hash: row.password_hash,
        }
    }
}

/// Product joined with its manufacturer's name; load with [`PRODUCT_COLUMNS`].
#[derive(Debug, Clone, Queryable)]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub manufacturer: String,
    pub price: BigDecimal,
    pub image_url: String,
    pub description: String,
    pub category_id: i32,
    pub quantity: i32,
}

pub type ProductColumns = (
    products::id,
    products::name,
    manufacturers::name,
    products::price,
    products::image_url,
    products::description,
    products::category_id,
    products::quantity,
);

pub const PRODUCT_COLUMNS: ProductColumns = (
    products::id,
    products::name,
    manufacturers::name,
    products::price,
    products::image_url,
    products::description,
    products::category_id,
    products::quantity,
);

impl From<ProductRow> for ProductView {
    fn from(row: ProductRow) -> Self {
        ProductView {
            id: row.id,
            name: row.name,
            manufacturer: row.manufacturer,
            price: row.price,
            image_url: row.image_url,
            description: row.description,
            category_id: row.category_id,
            stock_quantity: row.quantity,
        }
    }
}
