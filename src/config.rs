// src/config.rs
use std::env;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub host: IpAddr,
    pub port: u16,
}

const DEFAULT_HOST: [u8; 4] = [0, 0, 0, 0];
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

impl Config {
    /// Reads settings from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let url = get("DATABASE_URL").unwrap_or_else(|| {
            format!(
                "postgres://{}:{}@{}:{}/{}",
                get("DB_USER").unwrap_or_else(|| "postgres".to_string()),
                get("DB_PASSWORD").unwrap_or_default(),
                get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                get("DB_PORT").unwrap_or_else(|| "5432".to_string()),
                get("DB_NAME").unwrap_or_else(|| "postgres".to_string()),
            )
        });

        let max_connections = get("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let host = get("HOST")
            .and_then(|h| h.parse().ok())
            .unwrap_or(IpAddr::from(DEFAULT_HOST));
        let port = get("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            database: DatabaseConfig { url, max_connections },
            host,
            port,
        }
    }
}
