//! Server configuration.
//!
//! Everything is read from environment variables at startup:
//!
//! | Variable           | Meaning                                   | Default                  |
//! |--------------------|-------------------------------------------|--------------------------|
//! | `ADM_HOST`         | Interface the server binds to             | `127.0.0.1`              |
//! | `ADM_PORT`         | Port the server binds to                  | `8080`                   |
//! | `ADM_DATABASE_URL` | Database connection string                | `sqlite://data/admin.db` |
//! | `ADM_JWT_SECRET`   | HMAC key material for signing tokens      | random (see below)       |
//!
//! If `ADM_JWT_SECRET` is missing, a random secret is generated for the lifetime of the process.
//! Tokens issued against it die with the process, so set the variable in production.

use std::env;

use adm_common::Secret;
use log::{error, warn};
use rand::{distributions::Alphanumeric, Rng};

pub const DEFAULT_ADM_HOST: &str = "127.0.0.1";
pub const DEFAULT_ADM_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub auth: AuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_ADM_HOST.to_string(),
            port: DEFAULT_ADM_PORT,
            database_url: admin_engine::db_url(),
            auth: AuthConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("ADM_HOST").ok().unwrap_or_else(|| DEFAULT_ADM_HOST.into());
        let port = env::var("ADM_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!("{s} is not a valid port. {e} Using the default, {DEFAULT_ADM_PORT}, instead.");
                    DEFAULT_ADM_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_ADM_PORT);
        let database_url = admin_engine::db_url();
        Self { host, port, database_url, auth: AuthConfig::try_from_env() }
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The HMAC key material used to sign and verify access tokens.
    pub jwt_secret: Secret<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        warn!(
            "🚨️ ADM_JWT_SECRET is not set. Generating a random secret for this session. Tokens will not survive a \
             restart, so set this variable in production."
        );
        let secret = rand::thread_rng().sample_iter(&Alphanumeric).take(64).map(char::from).collect::<String>();
        Self { jwt_secret: Secret::new(secret) }
    }
}

impl AuthConfig {
    pub fn try_from_env() -> Self {
        match env::var("ADM_JWT_SECRET") {
            Ok(secret) if secret.len() >= 32 => Self { jwt_secret: Secret::new(secret) },
            Ok(secret) => {
                warn!(
                    "🚨️ ADM_JWT_SECRET is only {} characters long. Use at least 32 characters of random key \
                     material.",
                    secret.len()
                );
                Self { jwt_secret: Secret::new(secret) }
            },
            Err(_) => Self::default(),
        }
    }
}
