use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::AuthSession;
use crate::domain::customer::{Credentials, Registration};
use crate::errors::AppError;
use crate::AppState;

use super::ErrorResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub patronymic: String,
    pub telephone: String,
    pub login: String,
    pub password: String,
}

impl From<RegisterRequest> for Registration {
    fn from(r: RegisterRequest) -> Self {
        Registration {
            name: r.name,
            surname: r.surname,
            patronymic: r.patronymic,
            telephone: r.telephone,
            login: r.login,
            password: r.password,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub login: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    /// Bearer token valid for 24 hours
    pub token: String,
    pub user: UserSummary,
}

impl AuthResponse {
    fn new(message: &str, session: AuthSession) -> Self {
        let customer = session.customer;
        Self {
            success: true,
            message: message.to_string(),
            token: session.token,
            user: UserSummary {
                id: customer.id,
                name: customer.name,
                surname: customer.surname,
                login: customer.login,
            },
        }
    }
}

/// POST /api/register
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Customer registered", body = AuthResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Login already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let form = Registration::from(body.into_inner());
    let session = web::block(move || state.auth.register(form)).await??;
    Ok(HttpResponse::Created().json(AuthResponse::new("User registered successfully", session)))
}

/// POST /api/login
///
/// Unknown logins and wrong passwords produce the same 401 response.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Invalid login or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "auth"
)]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let credentials = Credentials {
        login: body.login,
        password: body.password,
    };
    let session = web::block(move || state.auth.login(credentials)).await??;
    Ok(HttpResponse::Ok().json(AuthResponse::new("Login successful", session)))
}
