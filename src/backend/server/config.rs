/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * builds the PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * | Variable | Default | Meaning |
 * |---|---|---|
 * | `DATABASE_URL` | - | full connection URL, wins over the parts below |
 * | `DB_HOST` / `DB_PORT` | `localhost` / `5432` | server address |
 * | `DB_USER` / `DB_PASSWORD` / `DB_NAME` | - | credentials and database |
 * | `JWT_SECRET` (or `JWTSECRET`) | - | token signing secret, required |
 * | `PORT` (or `SERVER_PORT`) | `4000` | listen port |
 * | `DB_MAX_CONNECTIONS` | `10` | pool size |
 *
 * # Error Handling
 *
 * Missing or unparsable settings are a `ConfigError` and abort startup.
 * Database reachability is different: the pool connects lazily, and a
 * failed startup probe or migration is logged without stopping the server.
 */

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use thiserror::Error;

/// Port used when neither `PORT` nor `SERVER_PORT` is set
pub const DEFAULT_PORT: u16 = 4000;

/// Pool size used when `DB_MAX_CONNECTIONS` is not set
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: &'static str, message: String },
}

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection options
    pub database: PgConnectOptions,
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,
    /// TCP port to listen on
    pub port: u16,
    /// Maximum pool connections
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database = match get("DATABASE_URL") {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "DATABASE_URL",
                    message: e.to_string(),
                })?,
            None => {
                let user = get("DB_USER").ok_or(ConfigError::MissingValue("DATABASE_URL or DB_USER"))?;
                let name = get("DB_NAME").ok_or(ConfigError::MissingValue("DATABASE_URL or DB_NAME"))?;
                let host = get("DB_HOST").unwrap_or_else(|| "localhost".to_string());
                let port = parse_or("DB_PORT", get("DB_PORT"), 5432u16)?;

                let mut options = PgConnectOptions::new()
                    .host(&host)
                    .port(port)
                    .username(&user)
                    .database(&name);
                if let Some(password) = get("DB_PASSWORD") {
                    options = options.password(&password);
                }
                options
            }
        };

        let jwt_secret = get("JWT_SECRET")
            .or_else(|| get("JWTSECRET"))
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let port = parse_or("PORT", get("PORT").or_else(|| get("SERVER_PORT")), DEFAULT_PORT)?;

        let max_connections = parse_or(
            "DB_MAX_CONNECTIONS",
            get("DB_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                name: "DB_MAX_CONNECTIONS",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            database,
            jwt_secret,
            port,
            max_connections,
        })
    }
}

fn parse_or<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            message: format!("{:?}: {}", value, e),
        }),
        None => Ok(default),
    }
}

/// Build the connection pool, probe it and run migrations
///
/// The pool itself is created lazily, so an unreachable database does not
/// prevent startup. Requests that need the database will fail with 500
/// until it comes back.
pub async fn load_database(config: &ServerConfig) -> PgPool {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy_with(config.database.clone());

    tracing::info!("Connecting to database...");
    match pool.acquire().await {
        Ok(_) => tracing::info!("Successfully connected to PostgreSQL"),
        Err(e) => {
            tracing::error!("Error connecting to PostgreSQL: {:?}", e);
            return pool;
        }
    }

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    pool
}
