//! Service descriptor handler.

use axum::{Json, response::IntoResponse};

/// Handler for the root path.
///
/// Returns a short service descriptor with a usage hint. Never includes
/// tokens, secrets, or the tenant roster; credentials are provisioned
/// out of band.
///
/// # HTTP Request
///
/// `GET [base]/`
pub async fn service_info_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "strata",
        "version": env!("CARGO_PKG_VERSION"),
        "usage": "Authenticate with an 'Authorization: Bearer <token>' header"
    }))
}
