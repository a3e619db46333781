//! Route configuration.
//!
//! Defines all routes for the Strata REST API.

use axum::{
    Router,
    routing::{get, put},
};

use crate::handlers;
use crate::state::AppState;

/// Creates all REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /` - Service descriptor
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Customer records (tenant-scoped)
/// - `GET /customers` - List records
/// - `POST /customers` - Create a record
/// - `PUT /customers/{name}` - Rename a record
/// - `DELETE /customers/{name}` - Delete a record
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // System-level routes
        .route("/", get(handlers::service_info_handler))
        .route("/health", get(handlers::health_handler))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler))
        // Customer record routes
        .route(
            "/customers",
            get(handlers::list_customers_handler).post(handlers::create_customer_handler),
        )
        .route(
            "/customers/{name}",
            put(handlers::update_customer_handler).delete(handlers::delete_customer_handler),
        )
        // State
        .with_state(state)
}
