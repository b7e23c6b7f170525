use super::customer::{Customer, NewCustomer};
use super::errors::DomainError;
use super::order::{AddressInput, NewDelivery, NewOrder};
use super::product::{ProductListKind, ProductView};

/// Writes available inside one order-placement transaction.
pub trait OrderUnitOfWork {
    fn customer_exists(&mut self, customer_id: i32) -> Result<bool, DomainError>;
    fn insert_address(&mut self, customer_id: i32, address: &AddressInput)
        -> Result<i32, DomainError>;
    fn insert_order(&mut self, order: &NewOrder) -> Result<i32, DomainError>;
    /// Inserts one line per entry of `product_ids`, in order.
    fn insert_order_lines(&mut self, order_id: i32, product_ids: &[i32])
        -> Result<usize, DomainError>;
    fn insert_delivery(&mut self, delivery: &NewDelivery) -> Result<i32, DomainError>;
    /// Removes every line of the customer's basket; an empty basket is not an error.
    fn clear_basket(&mut self, customer_id: i32) -> Result<usize, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Runs `work` inside a transaction. The transaction commits only when
    /// `work` returns `Ok`; every other exit rolls it back.
    fn in_transaction<T, F>(&self, work: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut dyn OrderUnitOfWork) -> Result<T, DomainError>;
}

pub trait CustomerRepository: Send + Sync + 'static {
    fn login_exists(&self, login: &str) -> Result<bool, DomainError>;
    /// Fails with `DomainError::Conflict` if the login was taken concurrently.
    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError>;
    fn find_by_login(&self, login: &str) -> Result<Option<Customer>, DomainError>;
}

pub trait CatalogRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<ProductView>, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<ProductView>, DomainError>;
    fn list_by_category(&self, category_id: i32) -> Result<Vec<ProductView>, DomainError>;
}

/// A per-customer set of products (basket or favourites).
pub trait ProductListRepository: Send + Sync + 'static {
    fn kind(&self) -> ProductListKind;
    /// Adds the product; adding a product already present is a no-op.
    /// Fails with `DomainError::NotFound` if the customer or product is unknown.
    fn add(&self, customer_id: i32, product_id: i32) -> Result<(), DomainError>;
    /// Returns `false` when the product was not in the list.
    fn remove(&self, customer_id: i32, product_id: i32) -> Result<bool, DomainError>;
    fn list(&self, customer_id: i32) -> Result<Vec<ProductView>, DomainError>;
    fn clear(&self, customer_id: i32) -> Result<usize, DomainError>;
}
