//! Server configuration for the Strata REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STRATA_SERVER_PORT` | 8080 | Server port |
//! | `STRATA_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `STRATA_LOG_LEVEL` | info | Log level |
//! | `STRATA_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `STRATA_ENABLE_CORS` | true | Enable CORS |
//! | `STRATA_CORS_ORIGINS` | * | Allowed origins |
//! | `STRATA_BASE_URL` | http://localhost:8080 | Server base URL |
//! | `STRATA_TOKEN_SECRET` | (required) | Bearer token signing secret |
//! | `STRATA_TENANT_ROSTER` | (required) | Path to the tenant roster file |
//! | `STRATA_DB_HOST` | localhost | PostgreSQL host |
//! | `STRATA_DB_PORT` | 5432 | PostgreSQL port |
//! | `STRATA_DB_NAME` | strata | Database name |
//! | `STRATA_DB_CONNECT_TIMEOUT` | 5 | Connection timeout (seconds) |
//! | `STRATA_DB_POOL_SIZE` | 10 | Max connections per tenant pool |
//!
//! The token secret and the per-tenant passwords in the roster file are
//! expected to come from a secrets store in production deployments; the
//! config layer only carries the values it is handed.

use std::path::PathBuf;

use clap::Parser;
use strata_tenancy::pool::DatabaseConfig;

/// Server configuration for the Strata REST API.
///
/// Constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using `ServerConfig::parse`, or
/// programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "strata")]
#[command(about = "Multi-tenant record service")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "STRATA_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "STRATA_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "STRATA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "STRATA_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "STRATA_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "STRATA_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(
        long,
        env = "STRATA_CORS_METHODS",
        default_value = "GET,POST,PUT,DELETE,OPTIONS"
    )]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "STRATA_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept"
    )]
    pub cors_headers: String,

    /// Base URL for the server (used in Location headers).
    #[arg(long, env = "STRATA_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Secret used to verify bearer token signatures.
    #[arg(long, env = "STRATA_TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: Option<String>,

    /// Path to the tenant roster file (JSON).
    #[arg(long, env = "STRATA_TENANT_ROSTER")]
    pub tenant_roster: Option<PathBuf>,

    /// PostgreSQL host.
    #[arg(long, env = "STRATA_DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// PostgreSQL port.
    #[arg(long, env = "STRATA_DB_PORT", default_value = "5432")]
    pub db_port: u16,

    /// Database name.
    #[arg(long, env = "STRATA_DB_NAME", default_value = "strata")]
    pub db_name: String,

    /// Database connection timeout in seconds.
    #[arg(long, env = "STRATA_DB_CONNECT_TIMEOUT", default_value = "5")]
    pub db_connect_timeout: u64,

    /// Maximum connections per tenant pool.
    #[arg(long, env = "STRATA_DB_POOL_SIZE", default_value = "10")]
    pub db_pool_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,POST,PUT,DELETE,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept".to_string(),
            base_url: "http://localhost:8080".to_string(),
            token_secret: None,
            tenant_roster: None,
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_name: "strata".to_string(),
            db_connect_timeout: 5,
            db_pool_size: 10,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables
    /// without requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the storage endpoint configuration for the connection
    /// provider.
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            host: self.db_host.clone(),
            port: self.db_port,
            dbname: self.db_name.clone(),
            connect_timeout_secs: self.db_connect_timeout,
            pool_max_size: self.db_pool_size,
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        match &self.token_secret {
            None => errors.push("Token secret is required (STRATA_TOKEN_SECRET)".to_string()),
            Some(secret) if secret.is_empty() => {
                errors.push("Token secret cannot be empty".to_string());
            }
            Some(_) => {}
        }

        if self.tenant_roster.is_none() {
            errors.push("Tenant roster path is required (STRATA_TENANT_ROSTER)".to_string());
        }

        if self.db_pool_size == 0 {
            errors.push("Pool size cannot be 0".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0, a fixed test secret, and a short database
    /// timeout so acquisition failures surface quickly.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            base_url: "http://localhost:0".to_string(),
            token_secret: Some("test-secret".to_string()),
            tenant_roster: None,
            db_connect_timeout: 1,
            db_pool_size: 4,
            ..Default::default()
        }
    }
}
