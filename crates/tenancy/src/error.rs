//! Error types for the tenant isolation core.
//!
//! The taxonomy separates three categories with different user-visible
//! behavior:
//!
//! | Category | Meaning | Transport mapping |
//! |----------|---------|-------------------|
//! | Authentication | The caller could not prove an identity | 401 |
//! | Authorization | The proven identity is not provisioned | 403 |
//! | Infrastructure | The system could not serve the request | 503 |
//!
//! Authentication and authorization errors always deny. Infrastructure
//! errors also deny the current request, but signal a system condition
//! operators alert on separately from security events.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::fmt;

use thiserror::Error;

use crate::tenant::TenantId;

/// Failures proving the caller's identity from a bearer credential.
///
/// Every variant denies the request. None of them grant partial trust,
/// and the resolution chain stops at the first one encountered.
#[derive(Error, Debug)]
pub enum AuthenticationError {
    /// No bearer material was presented at all.
    #[error("no bearer credential presented")]
    MissingCredential,

    /// The credential does not decompose into the expected
    /// scheme-plus-token structure, or the token itself is not decodable.
    #[error("malformed bearer credential")]
    MalformedCredential,

    /// The token's integrity check failed, or the token named an
    /// algorithm other than the one this process is pinned to.
    #[error("token signature verification failed")]
    InvalidSignature,

    /// The token verified but its payload lacks a usable tenant
    /// identity claim.
    #[error("token payload lacks a tenant identity claim")]
    MissingClaim,
}

/// Failures mapping a proven identity to a provisioned tenant.
#[derive(Error, Debug)]
pub enum AuthorizationError {
    /// The tenant identity has no registered credential set.
    #[error("unknown tenant: {tenant_id}")]
    UnknownTenant { tenant_id: TenantId },
}

/// Failures reaching the storage endpoint.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Opening or checking out a storage connection failed.
    #[error("storage connection unavailable: {message}")]
    ConnectionUnavailable { message: String },
}

/// The combined error type returned by the resolution chain.
///
/// Composes the three categories transparently so call sites can use `?`
/// across stages while dispatchers pattern-match on
/// [`ResolveError::category`] rather than individual variants.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Credential verification failures.
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    /// Tenant registry failures.
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    /// Storage connectivity failures.
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl ResolveError {
    /// Returns the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ResolveError::Authentication(_) => ErrorCategory::Authentication,
            ResolveError::Authorization(_) => ErrorCategory::Authorization,
            ResolveError::Infrastructure(_) => ErrorCategory::Infrastructure,
        }
    }

    /// Returns `true` if this error represents a denial (authentication
    /// or authorization) as opposed to a system condition.
    pub fn is_denial(&self) -> bool {
        !matches!(self, ResolveError::Infrastructure(_))
    }
}

/// Coarse error category, used by dispatchers for status mapping and by
/// operators for alerting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The caller could not prove an identity.
    Authentication,
    /// The proven identity is not provisioned.
    Authorization,
    /// The system could not serve the request.
    Infrastructure,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Authentication => "authentication",
            ErrorCategory::Authorization => "authorization",
            ErrorCategory::Infrastructure => "infrastructure",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        let auth: ResolveError = AuthenticationError::MissingCredential.into();
        assert_eq!(auth.category(), ErrorCategory::Authentication);

        let authz: ResolveError = AuthorizationError::UnknownTenant {
            tenant_id: TenantId::new("ghost"),
        }
        .into();
        assert_eq!(authz.category(), ErrorCategory::Authorization);

        let infra: ResolveError = InfrastructureError::ConnectionUnavailable {
            message: "connection refused".to_string(),
        }
        .into();
        assert_eq!(infra.category(), ErrorCategory::Infrastructure);
    }

    #[test]
    fn test_is_denial() {
        let auth: ResolveError = AuthenticationError::InvalidSignature.into();
        assert!(auth.is_denial());

        let infra: ResolveError = InfrastructureError::ConnectionUnavailable {
            message: "timed out".to_string(),
        }
        .into();
        assert!(!infra.is_denial());
    }

    #[test]
    fn test_display_does_not_echo_token_material() {
        // Authentication messages are fixed strings; nothing from the
        // credential ever flows into them.
        assert_eq!(
            AuthenticationError::MalformedCredential.to_string(),
            "malformed bearer credential"
        );
        assert_eq!(
            AuthenticationError::InvalidSignature.to_string(),
            "token signature verification failed"
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Authentication.to_string(), "authentication");
        assert_eq!(ErrorCategory::Authorization.to_string(), "authorization");
        assert_eq!(ErrorCategory::Infrastructure.to_string(), "infrastructure");
    }
}
