//! Health check endpoint handlers.
//!
//! Provides simple health endpoints for monitoring and load balancers.
//! None of these resolve a tenant or touch storage; they must stay
//! responsive while the database is down so operators can tell "server
//! up, storage down" from "server down".

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler(State(state): State<AppState>) -> RestResult<Response> {
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "tenants": state.resolver().registry().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for a liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for a readiness probe.
///
/// Reports the provisioned tenant count and how many tenant pools have
/// been created so far.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
pub async fn readiness_handler(State(state): State<AppState>) -> RestResult<Response> {
    debug!("Processing readiness check request");

    let response = serde_json::json!({
        "status": "ready",
        "checks": {
            "tenants": state.resolver().registry().len(),
            "pools": state.resolver().provider().pool_count()
        }
    });

    Ok((StatusCode::OK, Json(response)).into_response())
}
