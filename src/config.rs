use std::env;

use crate::types::error::AppError;
use crate::utils::password::PasswordScheme;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub db_url: String,
    pub max_connections: u32,
    pub password_scheme: PasswordScheme,
}

impl EnvConfig {
    fn get_env(key: &str) -> Result<String, AppError> {
        env::var(key).map_err(|_| AppError::Config(format!("environment variable {key} not set")))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();

        let db_url = Self::get_env("DATABASE_URL")?;
        let max_connections = Self::get_env_or("DB_MAX_CONNECTIONS", &DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .map_err(|_| AppError::Config("DB_MAX_CONNECTIONS must be an unsigned integer".into()))?;
        let password_scheme = Self::get_env_or("PASSWORD_SCHEME", "sha1")
            .parse()
            .map_err(AppError::Config)?;

        Ok(EnvConfig {
            db_url,
            max_connections,
            password_scheme,
        })
    }

    pub fn new(db_url: impl Into<String>) -> Self {
        EnvConfig {
            db_url: db_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            password_scheme: PasswordScheme::default(),
        }
    }
}
