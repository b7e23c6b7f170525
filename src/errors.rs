use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::{DomainError, StorageStage};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid login or password")]
    InvalidCredentials,

    #[error("Forbidden")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Storage error during {0}")]
    Storage(StorageStage),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::InvalidInput(msg) => AppError::BadRequest(msg),
            DomainError::Conflict(msg) => AppError::Conflict(msg),
            DomainError::InvalidCredentials => AppError::InvalidCredentials,
            DomainError::Storage { stage, message } => {
                log::error!("Storage failure during {}: {}", stage, message);
                AppError::Storage(stage)
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Storage(stage) => stage.public_message().to_string(),
            AppError::Internal(detail) => {
                log::error!("Internal error: {}", detail);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": message
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    async fn body_of(err: AppError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body())
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound("Product with ID 9 not found".to_string()).error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn status_codes_follow_error_class() {
        assert_eq!(
            AppError::BadRequest("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::Conflict("x".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Storage(StorageStage::Delivery).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn internal_error_hides_detail() {
        let body = body_of(AppError::Internal("pool timed out".to_string())).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Internal server error");
    }

    #[actix_web::test]
    async fn storage_error_names_stage_without_driver_text() {
        let app_err: AppError =
            DomainError::storage(StorageStage::Delivery, "violates foreign key constraint").into();
        let body = body_of(app_err).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Failed to create delivery");
    }

    #[actix_web::test]
    async fn client_errors_carry_their_message() {
        let body = body_of(AppError::Conflict("Login already exists".to_string())).await;
        assert_eq!(body["error"], "Login already exists");
    }

    #[test]
    fn domain_invalid_input_maps_to_bad_request() {
        let app_err: AppError = DomainError::InvalidInput("bad value".to_string()).into();
        assert!(matches!(app_err, AppError::BadRequest(_)));
    }

    #[test]
    fn domain_not_found_maps_to_app_not_found() {
        let app_err: AppError = DomainError::NotFound("gone".to_string()).into();
        assert!(matches!(app_err, AppError::NotFound(_)));
    }

    #[test]
    fn domain_invalid_credentials_maps_to_401() {
        let app_err: AppError = DomainError::InvalidCredentials.into();
        assert_eq!(app_err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
