use thiserror::Error;

const DEVELOPMENT_JWT_SECRET: &str = "development-only-jwt-secret-change-me";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid port number, got '{value}'")]
    InvalidPort { key: &'static str, value: String },

    #[error("APP_ENV must be 'development' or 'production', got '{0}'")]
    InvalidEnvironment(String),

    #[error("JWT_SECRET must be set when APP_ENV=production")]
    MissingJwtSecret,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Process settings, read once at startup and handed to the components
/// that need them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub cors_origin: String,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let environment = match get("APP_ENV", "development").as_str() {
            "development" => Environment::Development,
            "production" => Environment::Production,
            other => return Err(ConfigError::InvalidEnvironment(other.to_string())),
        };

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                get("DB_USER", "postgres"),
                get("DB_PASSWORD", ""),
                get("DB_HOST", "localhost"),
                get("DB_PORT", "5432"),
                get("DB_NAME", "footballstore"),
            ),
        };

        let (port_key, port_value) = match lookup("PORT") {
            Some(value) => ("PORT", value),
            None => ("SERVER_PORT", get("SERVER_PORT", "8080")),
        };
        let port = port_value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort {
                key: port_key,
                value: port_value.clone(),
            })?;

        let jwt_secret = match (lookup("JWT_SECRET"), environment) {
            (Some(secret), _) if !secret.is_empty() => secret,
            (_, Environment::Production) => return Err(ConfigError::MissingJwtSecret),
            (_, Environment::Development) => {
                log::warn!("JWT_SECRET not set, using the development secret");
                DEVELOPMENT_JWT_SECRET.to_string()
            }
        };

        Ok(Self {
            environment,
            host: get("HOST", "0.0.0.0"),
            port,
            database_url,
            jwt_secret,
            cors_origin: get("CORS_ORIGIN", "http://localhost:5173"),
        })
    }
}
