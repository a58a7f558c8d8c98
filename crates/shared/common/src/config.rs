//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Default database URL for local development.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/graph_test?sslmode=disable";

/// Default cap on open pool connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 16;

/// Default number of connections kept idle in the pool.
pub const DEFAULT_MIN_CONNECTIONS: u32 = 4;

/// Database configuration.
///
/// The pool limits are applied once, when the connection is opened.
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Log every SQL statement through the driver
    pub sql_logging: bool,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("sql_logging", &self.sql_logging)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            sql_logging: false,
        }
    }
}

impl DatabaseConfig {
    /// Same limits, different URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_url() {
        let config = DatabaseConfig::default().with_url("postgres://user:secret@db/accounts");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("max_connections: 16"));
    }
}
