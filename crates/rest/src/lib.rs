//! # strata-rest - HTTP Dispatcher for the Strata Record Service
//!
//! This crate is the request-handling layer in front of the tenant
//! isolation core ([`strata_tenancy`]). It owns the ordinary CRUD
//! plumbing (routing, request/response shaping, status mapping) and
//! delegates every identity and storage-access decision to the core's
//! resolver, exactly once per request.
//!
//! ## Request Flow
//!
//! 1. The [`extractors::BearerHeader`] extractor pulls the raw
//!    `Authorization` header value (interpretation happens in the core)
//! 2. The handler calls
//!    [`TenantResolver::resolve`](strata_tenancy::resolver::TenantResolver::resolve)
//!    and receives either a tenant-scoped connection or a categorized
//!    denial
//! 3. Data operations run as parameterized statements through the scoped
//!    connection ([`store`])
//! 4. The connection drops back to its tenant's pool when the handler
//!    returns, on every exit path
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | service descriptor | GET | `/` |
//! | health | GET | `/health` |
//! | liveness probe | GET | `/_liveness` |
//! | readiness probe | GET | `/_readiness` |
//! | list records | GET | `/customers` |
//! | create record | POST | `/customers` |
//! | rename record | PUT | `/customers/{name}` |
//! | delete record | DELETE | `/customers/{name}` |
//!
//! ## Error Handling
//!
//! Core errors map to status codes by category, with fixed denial bodies
//! (see [`error`]):
//!
//! | HTTP Status | Category | Description |
//! |-------------|----------|-------------|
//! | 401 | authentication | Caller could not prove an identity |
//! | 403 | authorization | Identity is not a provisioned tenant |
//! | 503 | infrastructure | Storage endpoint unavailable |
//! | 404 | not-found | No matching record |
//! | 400 | invalid | Malformed request body |
//! | 500 | internal | Unexpected data-layer failure |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and response mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (resolver, configuration)
//! - [`extractors`] - Axum extractors
//! - [`handlers`] - HTTP request handlers
//! - [`store`] - Tenant-scoped data access
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use axum::Router;
use strata_tenancy::resolver::TenantResolver;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function for tests and examples. For real
/// deployments use [`create_app_with_config`].
pub fn create_app(resolver: TenantResolver) -> Router {
    create_app_with_config(resolver, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the full route table plus the middleware stack (trace,
/// timeout, optional CORS).
///
/// # Example
///
/// ```rust,ignore
/// use strata_rest::{ServerConfig, create_app_with_config};
///
/// let config = ServerConfig::from_env();
/// let app = create_app_with_config(resolver, config.clone());
/// let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
/// axum::serve(listener, app).await?;
/// ```
pub fn create_app_with_config(resolver: TenantResolver, config: ServerConfig) -> Router {
    info!(
        tenants = resolver.registry().len(),
        "Creating REST API server"
    );

    // Create application state
    let state = AppState::new(resolver, config.clone());

    // Build the router with all routes
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    // Add CORS if enabled
    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    // Configure origins
    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "strata_rest={},strata_tenancy={},tower_http=debug",
            level, level
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
