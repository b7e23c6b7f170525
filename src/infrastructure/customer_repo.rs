use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::db::{checkout, DbPool};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::{CustomerRow, NewCustomerRow};

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn login_exists(&self, login: &str) -> Result<bool, DomainError> {
        let mut conn = checkout(&self.pool)?;
        let found = diesel::select(exists(customers::table.filter(customers::login.eq(login))))
            .get_result(&mut conn)?;
        Ok(found)
    }

    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let mut conn = checkout(&self.pool)?;
        let row = diesel::insert_into(customers::table)
            .values(&NewCustomerRow {
                name: &customer.name,
                surname: &customer.surname,
                patronymic: &customer.patronymic,
                telephone: &customer.telephone,
                login: &customer.login,
                password_hash: &customer.password_hash,
            })
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    DomainError::Conflict("Login already exists".to_string())
                }
                other => other.into(),
            })?;
        Ok(row.into())
    }

    fn find_by_login(&self, login: &str) -> Result<Option<Customer>, DomainError> {
        let mut conn = checkout(&self.pool)?;
        let row = customers::table
            .filter(customers::login.eq(login))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;
        Ok(row.map(Customer::from))
    }
}
