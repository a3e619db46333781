//! Storage endpoint configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the shared PostgreSQL endpoint.
///
/// These are process-wide constants: every tenant connects to the same
/// host, port, and database. What differs per tenant is only the
/// principal, the username/password pair resolved by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL host.
    #[serde(default = "default_host")]
    pub host: String,

    /// PostgreSQL port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database name.
    #[serde(default = "default_dbname")]
    pub dbname: String,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Maximum number of connections per tenant pool.
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: usize,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_dbname() -> String {
    "strata".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_pool_max_size() -> usize {
    10
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dbname: default_dbname(),
            connect_timeout_secs: default_connect_timeout_secs(),
            pool_max_size: default_pool_max_size(),
        }
    }
}
