pub mod extractor;
pub mod password;
pub mod token;

pub use token::{TokenError, TokenService};

use crate::errors::AppError;

/// Identity decoded from a verified bearer token.
///
/// Handlers take it as a parameter; extraction fails with 401 before the
/// handler body runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedCustomer {
    pub customer_id: i32,
    pub login: String,
}

impl AuthenticatedCustomer {
    /// Reject requests that act on another customer's data.
    pub fn ensure_owns(&self, customer_id: i32) -> Result<(), AppError> {
        if self.customer_id != customer_id {
            log::warn!(
                "Customer {} attempted to act on customer {}",
                self.customer_id,
                customer_id
            );
            return Err(AppError::Forbidden);
        }
        Ok(())
    }
}
