use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};

use super::{AuthenticatedCustomer, TokenService};
use crate::errors::AppError;

impl FromRequest for AuthenticatedCustomer {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedCustomer, AppError> {
    let Some(tokens) = req.app_data::<web::Data<TokenService>>() else {
        log::error!("TokenService is not registered as app data");
        return Err(AppError::Internal("token service not configured".to_string()));
    };

    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        log::warn!("Authorization header missing on {}", req.path());
        return Err(AppError::Unauthorized);
    };

    let token = value
        .to_str()
        .ok()
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            log::warn!("Malformed Authorization header on {}", req.path());
            AppError::Unauthorized
        })?;

    tokens.verify(token).map_err(|e| {
        log::warn!("Rejected token on {}: {}", req.path(), e);
        AppError::Unauthorized
    })
}
