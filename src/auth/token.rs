use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AuthenticatedCustomer;

pub const TOKEN_LIFETIME_HOURS: i64 = 24;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Customer id.
    pub sub: String,
    pub login: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,
    #[error("Invalid token: {0}")]
    Invalid(String),
    #[error("Failed to issue token: {0}")]
    Issue(String),
}

/// Issues and verifies HS256 identity tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn issue(&self, customer_id: i32, login: &str) -> Result<String, TokenError> {
        self.issue_at(customer_id, login, Utc::now())
    }

    fn issue_at(
        &self,
        customer_id: i32,
        login: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: customer_id.to_string(),
            login: login.to_string(),
            exp: (issued_at + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
            iat: issued_at.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Issue(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<AuthenticatedCustomer, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            }
        })?;

        let customer_id = data
            .claims
            .sub
            .parse::<i32>()
            .map_err(|_| TokenError::Invalid(format!("bad subject '{}'", data.claims.sub)))?;

        Ok(AuthenticatedCustomer {
            customer_id,
            login: data.claims.login,
        })
    }
}
