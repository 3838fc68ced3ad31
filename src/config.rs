use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

const DEFAULT_DATABASE_URL: &str = "food_classification.db";
const DEFAULT_BIND_HOST: &str = "127.0.0.1";
const DEFAULT_BIND_PORT: u16 = 8080;
const DEFAULT_POOL_MAX_SIZE: u32 = 4;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 5;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StoreConfig {
    pub database_url: String,
    pub pool_max_size: u32,
    pub connection_timeout: Duration,
    pub busy_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    pub bind_host: String,
    pub bind_port: u16,
    pub store: StoreConfig,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first so a
    /// `.env` file is honored.
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pool_max_size = parse_or(&lookup, "DB_POOL_MAX_SIZE", DEFAULT_POOL_MAX_SIZE)?;
        if pool_max_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_POOL_MAX_SIZE",
                value: "0".to_string(),
            });
        }

        // r2d2 panics on a zero connection timeout
        let connection_timeout_secs = parse_or(
            &lookup,
            "DB_CONNECTION_TIMEOUT_SECS",
            DEFAULT_CONNECTION_TIMEOUT_SECS,
        )?;
        if connection_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_CONNECTION_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Config {
            bind_host: lookup("BIND_HOST").unwrap_or_else(|| DEFAULT_BIND_HOST.to_string()),
            bind_port: parse_or(&lookup, "BIND_PORT", DEFAULT_BIND_PORT)?,
            store: StoreConfig {
                database_url: lookup("DATABASE_URL")
                    .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
                pool_max_size,
                connection_timeout: Duration::from_secs(connection_timeout_secs),
                busy_timeout: Duration::from_millis(parse_or(
                    &lookup,
                    "DB_BUSY_TIMEOUT_MS",
                    DEFAULT_BUSY_TIMEOUT_MS,
                )?),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
