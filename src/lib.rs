pub mod application;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{error, guard, web, App, HttpRequest, HttpResponse, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AuthService, CatalogService, OrderService, ProductListService};
use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::infrastructure::{
    DieselCatalogRepository, DieselCustomerRepository, DieselOrderRepository,
    DieselProductListRepository,
};

pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

type MigrationError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), MigrationError> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    log::info!("Applied {} pending migrations", applied.len());
    Ok(())
}

/// Services shared by every worker.
pub struct AppState {
    pub orders: OrderService<DieselOrderRepository>,
    pub auth: AuthService<DieselCustomerRepository>,
    pub catalog: CatalogService<DieselCatalogRepository>,
    pub basket: ProductListService<DieselProductListRepository>,
    pub favourites: ProductListService<DieselProductListRepository>,
}

impl AppState {
    pub fn new(pool: DbPool, tokens: TokenService) -> Self {
        Self {
            orders: OrderService::new(DieselOrderRepository::new(pool.clone())),
            auth: AuthService::new(DieselCustomerRepository::new(pool.clone()), tokens),
            catalog: CatalogService::new(DieselCatalogRepository::new(pool.clone())),
            basket: ProductListService::new(DieselProductListRepository::basket(pool.clone())),
            favourites: ProductListService::new(DieselProductListRepository::favourites(pool)),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::products_by_category,
        handlers::favourites::add_favourite,
        handlers::favourites::remove_favourite,
        handlers::favourites::clear_favourites,
        handlers::favourites::get_favourites,
        handlers::basket::add_to_basket,
        handlers::basket::remove_from_basket,
        handlers::basket::clear_basket,
        handlers::basket::get_basket,
        handlers::orders::create_order,
    ),
    components(schemas(
        handlers::MessageResponse,
        handlers::ErrorResponse,
        handlers::ProductListItemRequest,
        handlers::ProductListOwnerRequest,
        handlers::auth::RegisterRequest,
        handlers::auth::LoginRequest,
        handlers::auth::AuthResponse,
        handlers::auth::UserSummary,
        handlers::products::ProductResponse,
        handlers::orders::AddressRequest,
        handlers::orders::CreateOrderRequest,
        handlers::orders::CreateOrderResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "products", description = "Product catalog"),
        (name = "favorites", description = "Customer favourites"),
        (name = "basket", description = "Customer basket"),
        (name = "orders", description = "Checkout"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

fn json_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body on {}: {}", req.path(), err);
    AppError::BadRequest("Invalid request body".to_string()).into()
}

fn path_error(err: error::PathError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected path {}: {}", req.path(), err);
    AppError::BadRequest("Invalid path parameter".to_string()).into()
}

fn query_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected query on {}: {}", req.path(), err);
    AppError::BadRequest("Invalid query parameters".to_string()).into()
}

/// CORS headers added to every response, preflight answers included.
fn cors_headers(origin: &str) -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string()))
        .add((
            header::ACCESS_CONTROL_ALLOW_METHODS,
            "POST, GET, OPTIONS, PUT, DELETE",
        ))
        .add((
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Content-Type, Authorization",
        ))
        .add((header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"))
}

/// Build and return an actix-web `Server` bound to the configured address.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(pool: DbPool, config: &AppConfig) -> std::io::Result<actix_web::dev::Server> {
    let tokens = TokenService::new(&config.jwt_secret);
    let state = web::Data::new(AppState::new(pool, tokens.clone()));
    let tokens = web::Data::new(tokens);
    let cors_origin = config.cors_origin.clone();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(tokens.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .app_data(web::PathConfig::default().error_handler(path_error))
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .wrap(cors_headers(&cors_origin))
            .wrap(Logger::default())
            // Preflight requests are answered before any route or extractor runs.
            .service(
                web::resource("/{tail:.*}")
                    .guard(guard::Options())
                    .to(preflight),
            )
            .service(
                web::scope("/api")
                    .route("/register", web::post().to(handlers::auth::register))
                    .route("/login", web::post().to(handlers::auth::login))
                    .route("/products", web::get().to(handlers::products::list_products))
                    .route(
                        "/products/category/{category_id}",
                        web::get().to(handlers::products::products_by_category),
                    )
                    .route("/products/{id}", web::get().to(handlers::products::get_product))
                    .service(
                        web::scope("/favorites")
                            .route("", web::get().to(handlers::favourites::get_favourites))
                            .route("/add", web::post().to(handlers::favourites::add_favourite))
                            .route(
                                "/remove",
                                web::post().to(handlers::favourites::remove_favourite),
                            )
                            .route(
                                "/clear",
                                web::post().to(handlers::favourites::clear_favourites),
                            ),
                    )
                    .service(
                        web::scope("/basket")
                            .route("", web::get().to(handlers::basket::get_basket))
                            .route("/add", web::post().to(handlers::basket::add_to_basket))
                            .route(
                                "/remove",
                                web::post().to(handlers::basket::remove_from_basket),
                            )
                            .route("/clear", web::post().to(handlers::basket::clear_basket)),
                    )
                    .route("/orders", web::post().to(handlers::orders::create_order)),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((config.host.clone(), config.port))?
    .run())
}
