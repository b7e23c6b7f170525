use validator::{Validate, ValidationErrors};

use crate::auth::password::{hash_password, verify_password, verify_without_account};
use crate::auth::TokenService;
use crate::domain::customer::{Credentials, Customer, NewCustomer, Registration};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

/// A freshly issued token together with the customer it identifies.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub customer: Customer,
}

pub struct AuthService<C> {
    customers: C,
    tokens: TokenService,
}

impl<C: CustomerRepository> AuthService<C> {
    pub fn new(customers: C, tokens: TokenService) -> Self {
        Self { customers, tokens }
    }

    pub fn register(&self, form: Registration) -> Result<AuthSession, DomainError> {
        form.validate()
            .map_err(|e| DomainError::InvalidInput(describe_validation(&e)))?;

        if self.customers.login_exists(&form.login)? {
            log::warn!("Registration rejected: login '{}' already exists", form.login);
            return Err(DomainError::Conflict("Login already exists".to_string()));
        }

        let password_hash = hash_password(&form.password)
            .map_err(|e| DomainError::Internal(format!("password hashing failed: {}", e)))?;

        let customer = self.customers.create(NewCustomer {
            name: form.name,
            surname: form.surname,
            patronymic: form.patronymic,
            telephone: form.telephone,
            login: form.login,
            password_hash,
        })?;

        let session = self.open_session(customer)?;
        log::info!("Customer {} registered", session.customer.id);
        Ok(session)
    }

    /// Unknown logins and wrong passwords fail identically.
    pub fn login(&self, credentials: Credentials) -> Result<AuthSession, DomainError> {
        let customer = match self.customers.find_by_login(&credentials.login)? {
            Some(c) => verify_password(&credentials.password, &c.password_hash).then_some(c),
            None => {
                verify_without_account(&credentials.password);
                None
            }
        };

        let Some(customer) = customer else {
            log::warn!("Invalid login attempt for '{}'", credentials.login);
            return Err(DomainError::InvalidCredentials);
        };

        let session = self.open_session(customer)?;
        log::info!("Customer {} logged in", session.customer.id);
        Ok(session)
    }

    fn open_session(&self, customer: Customer) -> Result<AuthSession, DomainError> {
        let token = self
            .tokens
            .issue(customer.id, &customer.login)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(AuthSession { token, customer })
    }
}

fn describe_validation(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |err| format!("Field '{}' failed validation ({})", field, err.code))
        })
        .collect::<Vec<_>>()
        .join("; ")
}
