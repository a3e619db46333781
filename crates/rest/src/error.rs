//! Error types for the REST API.
//!
//! This module maps the core's error taxonomy onto transport-level
//! responses:
//!
//! | Core category | HTTP Status | Body category |
//! |---------------|-------------|---------------|
//! | Authentication | 401 | authentication |
//! | Authorization | 403 | authorization |
//! | Infrastructure | 503 | infrastructure |
//!
//! Denial bodies are fixed strings per category. Which stage denied a
//! request (bad signature vs missing claim vs unknown tenant) is logged
//! server-side but never returned to the caller, so responses cannot be
//! used to enumerate tenants or probe the verification chain.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::fmt;
use strata_tenancy::error::{ErrorCategory, ResolveError};
use tracing::{debug, error, warn};

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// The caller could not prove an identity (HTTP 401).
    AuthenticationDenied,

    /// The proven identity is not provisioned (HTTP 403).
    AuthorizationDenied,

    /// The storage endpoint could not be reached (HTTP 503).
    StorageUnavailable,

    /// No record matched the request (HTTP 404).
    NotFound {
        /// The record name that did not match.
        name: String,
    },

    /// The request was structurally invalid (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unexpected failure performing a data operation (HTTP 500).
    Internal {
        /// Error message (logged, not returned).
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::AuthenticationDenied => write!(f, "authentication failed"),
            RestError::AuthorizationDenied => write!(f, "access denied"),
            RestError::StorageUnavailable => write!(f, "storage unavailable"),
            RestError::NotFound { name } => write!(f, "customer not found: {}", name),
            RestError::BadRequest { message } => write!(f, "bad request: {}", message),
            RestError::Internal { message } => write!(f, "internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, category, message) = match &self {
            RestError::AuthenticationDenied => (
                StatusCode::UNAUTHORIZED,
                "authentication",
                "authentication failed".to_string(),
            ),
            RestError::AuthorizationDenied => (
                StatusCode::FORBIDDEN,
                "authorization",
                "access denied".to_string(),
            ),
            RestError::StorageUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "infrastructure",
                "storage unavailable".to_string(),
            ),
            RestError::NotFound { name } => (
                StatusCode::NOT_FOUND,
                "not-found",
                format!("customer not found: {}", name),
            ),
            RestError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "invalid", message.clone())
            }
            // Internal detail is logged where the error arises; the
            // response carries only the category.
            RestError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "internal server error".to_string(),
            ),
        };

        let body = error_body(category, &message);

        if status == StatusCode::UNAUTHORIZED {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], Json(body)).into_response()
        } else {
            (status, Json(body)).into_response()
        }
    }
}

/// Creates the JSON error body.
fn error_body(category: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "category": category,
        "error": message
    })
}

impl From<ResolveError> for RestError {
    fn from(err: ResolveError) -> Self {
        match err.category() {
            ErrorCategory::Authentication => {
                debug!(error = %err, "authentication denied");
                RestError::AuthenticationDenied
            }
            ErrorCategory::Authorization => {
                warn!(error = %err, "authorization denied");
                RestError::AuthorizationDenied
            }
            ErrorCategory::Infrastructure => {
                error!(error = %err, "tenant connection unavailable");
                RestError::StorageUnavailable
            }
        }
    }
}

impl From<tokio_postgres::Error> for RestError {
    fn from(err: tokio_postgres::Error) -> Self {
        error!(error = %err, "data operation failed");
        RestError::Internal {
            message: err.to_string(),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use strata_tenancy::error::{AuthenticationError, AuthorizationError, InfrastructureError};
    use strata_tenancy::tenant::TenantId;

    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            RestError::AuthenticationDenied.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            RestError::AuthorizationDenied.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            RestError::StorageUnavailable.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            RestError::NotFound {
                name: "First National".to_string()
            }
            .into_response()
            .status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::BadRequest {
                message: "name is required".to_string()
            }
            .into_response()
            .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unauthorized_carries_challenge() {
        let response = RestError::AuthenticationDenied.into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_all_authentication_stages_collapse_to_one_variant() {
        // Anti-enumeration: every authentication failure maps to the same
        // response regardless of which stage denied it.
        let stages = [
            AuthenticationError::MissingCredential,
            AuthenticationError::MalformedCredential,
            AuthenticationError::InvalidSignature,
            AuthenticationError::MissingClaim,
        ];
        for stage in stages {
            let mapped: RestError = ResolveError::from(stage).into();
            assert!(matches!(mapped, RestError::AuthenticationDenied));
        }
    }

    #[test]
    fn test_unknown_tenant_maps_to_forbidden_without_identity() {
        let err = ResolveError::from(AuthorizationError::UnknownTenant {
            tenant_id: TenantId::new("ghost"),
        });
        let mapped: RestError = err.into();
        assert!(matches!(mapped, RestError::AuthorizationDenied));
        // The response message never echoes the asserted identity.
        assert_eq!(mapped.to_string(), "access denied");
    }

    #[test]
    fn test_infrastructure_keeps_distinct_category() {
        let err = ResolveError::from(InfrastructureError::ConnectionUnavailable {
            message: "connection refused".to_string(),
        });
        let mapped: RestError = err.into();
        assert!(matches!(mapped, RestError::StorageUnavailable));
    }

    #[test]
    fn test_internal_display_keeps_detail_for_logs() {
        let err = RestError::Internal {
            message: "relation does not exist".to_string(),
        };
        assert!(err.to_string().contains("relation does not exist"));
    }
}
