//! Static tenant registry.
//!
//! The registry is the single source of truth for which tenants are
//! provisioned and which storage principal each one uses. It is built
//! once at process start, from a roster file or programmatically, and
//! is immutable afterwards, so lookups need no synchronization.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::error::AuthorizationError;

use super::credentials::TenantCredentials;
use super::id::TenantId;

/// One entry of a tenant roster file.
///
/// Roster files are JSON arrays of these entries:
///
/// ```json
/// [
///   { "tenant": "acme",   "username": "tenant_acme",   "password": "..." },
///   { "tenant": "globex", "username": "tenant_globex", "password": "..." }
/// ]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    /// The tenant identity this entry provisions.
    pub tenant: TenantId,
    /// Storage username for the tenant's principal.
    pub username: String,
    /// Storage password for the tenant's principal.
    pub password: String,
}

/// Errors loading or validating a tenant roster.
///
/// Roster problems are startup failures. A server with a broken roster
/// must not come up: an empty roster would deny every caller, and a
/// duplicate entry would make the tenant-to-credentials mapping ambiguous.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("failed to read tenant roster {path}: {source}")]
    Io {
        /// Path of the roster file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The roster file is not valid JSON in the expected shape.
    #[error("failed to parse tenant roster {path}: {source}")]
    Parse {
        /// Path of the roster file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The same tenant appears more than once.
    #[error("duplicate tenant in roster: {tenant_id}")]
    DuplicateTenant {
        /// The duplicated tenant identity.
        tenant_id: TenantId,
    },

    /// The roster provisions no tenants at all.
    #[error("tenant roster is empty")]
    Empty,
}

/// Maps tenant identities to their dedicated storage credentials.
///
/// Lookups are deterministic and side-effect free. An identity without a
/// registered entry is rejected with
/// [`AuthorizationError::UnknownTenant`] before any storage access
/// happens.
///
/// # Examples
///
/// ```
/// use strata_tenancy::tenant::{TenantId, TenantRegistry};
///
/// let registry = TenantRegistry::builder()
///     .tenant("acme", "tenant_acme", "password_a")
///     .tenant("globex", "tenant_globex", "password_b")
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// assert!(registry.credentials(&TenantId::new("acme")).is_ok());
/// assert!(registry.credentials(&TenantId::new("ghost")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TenantRegistry {
    entries: HashMap<TenantId, TenantCredentials>,
}

impl TenantRegistry {
    /// Returns a builder for programmatic registry construction.
    pub fn builder() -> TenantRegistryBuilder {
        TenantRegistryBuilder {
            entries: Vec::new(),
        }
    }

    /// Loads a registry from a JSON roster file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let roster: Vec<RosterEntry> =
            serde_json::from_str(&contents).map_err(|source| RosterError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_roster(roster)
    }

    /// Builds a registry from parsed roster entries.
    pub fn from_roster(roster: Vec<RosterEntry>) -> Result<Self, RosterError> {
        if roster.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut entries = HashMap::with_capacity(roster.len());
        for entry in roster {
            let credentials = TenantCredentials::new(entry.username, entry.password);
            if entries.insert(entry.tenant.clone(), credentials).is_some() {
                return Err(RosterError::DuplicateTenant {
                    tenant_id: entry.tenant,
                });
            }
        }

        Ok(Self { entries })
    }

    /// Resolves the credential set for a tenant identity.
    ///
    /// Fails with [`AuthorizationError::UnknownTenant`] when the identity
    /// has no registered entry.
    pub fn credentials(
        &self,
        tenant_id: &TenantId,
    ) -> Result<&TenantCredentials, AuthorizationError> {
        self.entries
            .get(tenant_id)
            .ok_or_else(|| AuthorizationError::UnknownTenant {
                tenant_id: tenant_id.clone(),
            })
    }

    /// Returns the number of provisioned tenants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no tenants are provisioned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the provisioned tenant identities.
    ///
    /// Used for startup logging; order is unspecified.
    pub fn tenant_ids(&self) -> impl Iterator<Item = &TenantId> {
        self.entries.keys()
    }
}

/// Builder for [`TenantRegistry`].
#[derive(Debug)]
pub struct TenantRegistryBuilder {
    entries: Vec<RosterEntry>,
}

impl TenantRegistryBuilder {
    /// Adds a tenant with its storage principal.
    pub fn tenant(
        mut self,
        tenant: impl Into<TenantId>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.entries.push(RosterEntry {
            tenant: tenant.into(),
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Builds the registry, validating the accumulated entries.
    pub fn build(self) -> Result<TenantRegistry, RosterError> {
        TenantRegistry::from_roster(self.entries)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn sample_registry() -> TenantRegistry {
        TenantRegistry::builder()
            .tenant("acme", "tenant_acme", "password_a")
            .tenant("globex", "tenant_globex", "password_b")
            .build()
            .unwrap()
    }

    #[test]
    fn test_lookup_known_tenant() {
        let registry = sample_registry();
        let creds = registry.credentials(&TenantId::new("acme")).unwrap();
        assert_eq!(creds.username, "tenant_acme");
        assert_eq!(creds.password, "password_a");
    }

    #[test]
    fn test_lookup_unknown_tenant() {
        let registry = sample_registry();
        let err = registry.credentials(&TenantId::new("ghost")).unwrap_err();
        assert!(matches!(
            err,
            AuthorizationError::UnknownTenant { ref tenant_id } if tenant_id.as_str() == "ghost"
        ));
    }

    #[test]
    fn test_credentials_never_shared() {
        let registry = sample_registry();
        let a = registry.credentials(&TenantId::new("acme")).unwrap();
        let b = registry.credentials(&TenantId::new("globex")).unwrap();
        assert_ne!(a.username, b.username);
        assert_ne!(a.password, b.password);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let err = TenantRegistry::from_roster(Vec::new()).unwrap_err();
        assert!(matches!(err, RosterError::Empty));
    }

    #[test]
    fn test_duplicate_tenant_rejected() {
        let err = TenantRegistry::builder()
            .tenant("acme", "tenant_acme", "password_a")
            .tenant("acme", "tenant_acme2", "password_b")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            RosterError::DuplicateTenant { ref tenant_id } if tenant_id.as_str() == "acme"
        ));
    }

    #[test]
    fn test_load_roster_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{ "tenant": "acme", "username": "tenant_acme", "password": "password_a" }},
                {{ "tenant": "globex", "username": "tenant_globex", "password": "password_b" }}
            ]"#
        )
        .unwrap();

        let registry = TenantRegistry::load(file.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.credentials(&TenantId::new("globex")).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = TenantRegistry::load("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = TenantRegistry::load(file.path()).unwrap_err();
        assert!(matches!(err, RosterError::Parse { .. }));
    }

    #[test]
    fn test_tenant_ids_iteration() {
        let registry = sample_registry();
        let mut ids: Vec<_> = registry.tenant_ids().map(|t| t.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["acme", "globex"]);
    }
}
