//! Account service configuration.

use std::env;

use common::{DatabaseConfig, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS, DEFAULT_MIN_CONNECTIONS};

/// Account service configuration.
#[derive(Debug, Clone, Default)]
pub struct AccountServiceConfig {
    pub database: DatabaseConfig,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse_u32 = |key: &str, default: u32| {
            lookup(key)
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        Self {
            database: DatabaseConfig {
                url: lookup("ACCOUNT_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
                max_connections: parse_u32("DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
                min_connections: parse_u32("DATABASE_MIN_CONNECTIONS", DEFAULT_MIN_CONNECTIONS),
                sql_logging: lookup("DATABASE_SQL_LOGGING")
                    .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes"))
                    .unwrap_or(false),
            },
        }
    }
}
