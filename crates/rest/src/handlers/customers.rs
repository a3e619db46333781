//! Customer record handlers.
//!
//! Each handler resolves the caller's tenant context exactly once, runs
//! its data operation through the returned scoped connection, and lets
//! the connection drop back to its pool at the end of the request, on
//! success and on every error path alike.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::BearerHeader;
use crate::state::AppState;
use crate::store;

/// Request body for create and update operations.
#[derive(Debug, Deserialize)]
pub struct CustomerPayload {
    /// The customer name.
    #[serde(default)]
    pub name: Option<String>,
}

/// Extracts a non-empty name from the payload.
fn required_name(payload: &CustomerPayload) -> Result<&str, RestError> {
    match payload.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(RestError::BadRequest {
            message: "name is required".to_string(),
        }),
    }
}

/// Handler for listing customer records.
///
/// Returns all records visible to the authenticated tenant, ordered by
/// name.
///
/// # HTTP Request
///
/// `GET [base]/customers`
///
/// # Response
///
/// - `200 OK` - JSON array of records
/// - `401 / 403 / 503` - Denial or unavailability per the error taxonomy
pub async fn list_customers_handler(
    State(state): State<AppState>,
    bearer: BearerHeader,
) -> RestResult<Response> {
    let conn = state.resolver().resolve(bearer.credential()).await?;

    debug!(tenant_id = %conn.tenant_id(), "Processing customer list request");

    let records = store::customers::list(&conn).await?;
    Ok((StatusCode::OK, Json(records)).into_response())
}

/// Handler for creating a customer record.
///
/// # HTTP Request
///
/// `POST [base]/customers`
///
/// ```http
/// POST /customers HTTP/1.1
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {"name": "First National"}
/// ```
///
/// # Response
///
/// - `201 Created` - Record created; `Location` points at the record
/// - `400 Bad Request` - Missing or empty name
pub async fn create_customer_handler(
    State(state): State<AppState>,
    bearer: BearerHeader,
    Json(payload): Json<CustomerPayload>,
) -> RestResult<Response> {
    let name = required_name(&payload)?.to_string();

    let conn = state.resolver().resolve(bearer.credential()).await?;

    debug!(
        tenant_id = %conn.tenant_id(),
        customer = %name,
        "Processing customer create request"
    );

    let record = store::customers::create(&conn, &name).await?;
    let location = format!("{}/customers/{}", state.base_url(), record.name);

    let body = serde_json::json!({
        "tenant_id": record.tenant_id,
        "name": record.name,
        "status": "created"
    });

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response())
}

/// Handler for renaming a customer record.
///
/// # HTTP Request
///
/// `PUT [base]/customers/{name}`
///
/// # Response
///
/// - `200 OK` - Record renamed
/// - `404 Not Found` - No record with that name is visible to the tenant
pub async fn update_customer_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    bearer: BearerHeader,
    Json(payload): Json<CustomerPayload>,
) -> RestResult<Response> {
    let new_name = required_name(&payload)?.to_string();

    let conn = state.resolver().resolve(bearer.credential()).await?;

    debug!(
        tenant_id = %conn.tenant_id(),
        customer = %name,
        new_name = %new_name,
        "Processing customer update request"
    );

    let affected = store::customers::rename(&conn, &name, &new_name).await?;
    if affected == 0 {
        return Err(RestError::NotFound { name });
    }

    let body = serde_json::json!({
        "old_name": name,
        "new_name": new_name,
        "status": "updated"
    });

    Ok((StatusCode::OK, Json(body)).into_response())
}

/// Handler for deleting a customer record.
///
/// # HTTP Request
///
/// `DELETE [base]/customers/{name}`
///
/// # Response
///
/// - `200 OK` - Record deleted
/// - `404 Not Found` - No record with that name is visible to the tenant
pub async fn delete_customer_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    bearer: BearerHeader,
) -> RestResult<Response> {
    let conn = state.resolver().resolve(bearer.credential()).await?;

    debug!(
        tenant_id = %conn.tenant_id(),
        customer = %name,
        "Processing customer delete request"
    );

    let affected = store::customers::delete(&conn, &name).await?;
    if affected == 0 {
        return Err(RestError::NotFound { name });
    }

    let body = serde_json::json!({
        "name": name,
        "status": "deleted"
    });

    Ok((StatusCode::OK, Json(body)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_name_present() {
        let payload = CustomerPayload {
            name: Some("First National".to_string()),
        };
        assert_eq!(required_name(&payload).unwrap(), "First National");
    }

    #[test]
    fn test_required_name_trims_whitespace() {
        let payload = CustomerPayload {
            name: Some("  First National  ".to_string()),
        };
        assert_eq!(required_name(&payload).unwrap(), "First National");
    }

    #[test]
    fn test_required_name_missing() {
        let payload = CustomerPayload { name: None };
        assert!(matches!(
            required_name(&payload),
            Err(RestError::BadRequest { .. })
        ));
    }

    #[test]
    fn test_required_name_blank() {
        let payload = CustomerPayload {
            name: Some("   ".to_string()),
        };
        assert!(matches!(
            required_name(&payload),
            Err(RestError::BadRequest { .. })
        ));
    }
}
