//! Per-tenant storage credentials.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The storage-layer principal dedicated to one tenant.
///
/// Each provisioned tenant owns exactly one username/password pair, and
/// the connection provider authenticates to the shared storage endpoint
/// as that principal. Credential sets are never shared across tenants.
///
/// The `Debug` implementation redacts the password so credential sets can
/// appear in logs and error context without leaking secrets.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantCredentials {
    /// Storage username for this tenant's principal.
    pub username: String,
    /// Storage password for this tenant's principal.
    pub password: String,
}

impl TenantCredentials {
    /// Creates a new credential set.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for TenantCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenantCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let creds = TenantCredentials::new("tenant_acme", "s3cret");
        assert_eq!(creds.username, "tenant_acme");
        assert_eq!(creds.password, "s3cret");
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = TenantCredentials::new("tenant_acme", "s3cret");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("tenant_acme"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let creds = TenantCredentials::new("tenant_acme", "s3cret");
        let json = serde_json::to_string(&creds).unwrap();
        let parsed: TenantCredentials = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, creds);
    }
}
