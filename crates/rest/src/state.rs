//! Application state for the REST API.
//!
//! This module defines the shared application state that is available to
//! all request handlers: the tenant resolver and the server
//! configuration, both immutable after startup.

use std::sync::Arc;

use strata_tenancy::resolver::TenantResolver;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// Holds the tenant resolver (the only gateway to storage; handlers
/// have no other way to obtain a connection) and the server
/// configuration.
pub struct AppState {
    /// The tenant context resolver.
    resolver: Arc<TenantResolver>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone; the fields are Arcs and the inner types do
// not need to be Clone themselves.
impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            config: Arc::clone(&self.config),
        }
    }
}

impl AppState {
    /// Creates a new AppState with the given resolver and configuration.
    pub fn new(resolver: TenantResolver, config: ServerConfig) -> Self {
        Self {
            resolver: Arc::new(resolver),
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the tenant resolver.
    pub fn resolver(&self) -> &TenantResolver {
        &self.resolver
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
