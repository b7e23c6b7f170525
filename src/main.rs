use std::io;

use dotenvy::dotenv;
use store_service::config::AppConfig;
use store_service::{build_server, create_pool, run_migrations};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let pool = create_pool(&config.database_url).map_err(|e| {
        log::error!("Failed to create database pool: {}", e);
        io::Error::other(e)
    })?;
    run_migrations(&pool).map_err(|e| {
        log::error!("Failed to run database migrations: {}", e);
        io::Error::other(e)
    })?;

    log::info!(
        "Starting server at http://{}:{} ({:?})",
        config.host,
        config.port,
        config.environment
    );

    build_server(pool, &config)?.await
}
