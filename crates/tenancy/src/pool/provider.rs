//! Tenant-scoped connection acquisition.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::time::Duration;

use deadpool_postgres::{Config, Object, Pool, Runtime};
use parking_lot::RwLock;
use tokio_postgres::NoTls;
use tracing::debug;

use crate::error::InfrastructureError;
use crate::tenant::{TenantCredentials, TenantId};

use super::config::DatabaseConfig;

/// Acquires storage connections bound to one tenant's principal.
///
/// All tenants share a single storage endpoint; the provider maintains a
/// lazily created connection pool per tenant, keyed by tenant identity
/// only. Each pool authenticates as the tenant's own principal, so the
/// storage endpoint's row-level-security policy sees the correct user.
/// The provider's entire job is authenticating as the *right* principal,
/// nothing more.
///
/// Failures opening or checking out a connection are
/// [`InfrastructureError::ConnectionUnavailable`]: an unavailability
/// condition, reported distinctly from the denial categories.
pub struct ConnectionProvider {
    config: DatabaseConfig,
    pools: RwLock<HashMap<TenantId, Pool>>,
}

impl fmt::Debug for ConnectionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionProvider")
            .field("config", &self.config)
            .field("pool_count", &self.pool_count())
            .finish()
    }
}

impl ConnectionProvider {
    /// Creates a provider for the given storage endpoint.
    ///
    /// No connections are opened here; pools are created on first
    /// acquisition for each tenant.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pools: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the endpoint configuration.
    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns the number of tenant pools created so far.
    pub fn pool_count(&self) -> usize {
        self.pools.read().len()
    }

    /// Acquires a connection authenticated as the tenant's principal.
    ///
    /// Suspends until either a live connection or a definitive failure
    /// is available. The returned [`TenantConnection`] goes back to its
    /// pool when dropped, on every exit path.
    pub async fn acquire(
        &self,
        tenant_id: &TenantId,
        credentials: &TenantCredentials,
    ) -> Result<TenantConnection, InfrastructureError> {
        let pool = self.pool(tenant_id, credentials)?;

        let client = pool
            .get()
            .await
            .map_err(|e| InfrastructureError::ConnectionUnavailable {
                message: e.to_string(),
            })?;

        debug!(tenant_id = %tenant_id, "acquired tenant-scoped connection");

        Ok(TenantConnection {
            tenant_id: tenant_id.clone(),
            client,
        })
    }

    /// Returns the pool for a tenant, creating it on first use.
    fn pool(
        &self,
        tenant_id: &TenantId,
        credentials: &TenantCredentials,
    ) -> Result<Pool, InfrastructureError> {
        if let Some(pool) = self.pools.read().get(tenant_id) {
            return Ok(pool.clone());
        }

        let mut pools = self.pools.write();
        // Another request may have created the pool between the read and
        // write lock.
        if let Some(pool) = pools.get(tenant_id) {
            return Ok(pool.clone());
        }

        let pool = self.build_pool(credentials)?;
        pools.insert(tenant_id.clone(), pool.clone());
        debug!(tenant_id = %tenant_id, "created tenant connection pool");
        Ok(pool)
    }

    fn build_pool(&self, credentials: &TenantCredentials) -> Result<Pool, InfrastructureError> {
        let mut cfg = Config::new();
        cfg.host = Some(self.config.host.clone());
        cfg.port = Some(self.config.port);
        cfg.dbname = Some(self.config.dbname.clone());
        cfg.user = Some(credentials.username.clone());
        cfg.password = Some(credentials.password.clone());
        cfg.connect_timeout = Some(Duration::from_secs(self.config.connect_timeout_secs));

        cfg.builder(NoTls)
            .map_err(|e| InfrastructureError::ConnectionUnavailable {
                message: e.to_string(),
            })?
            .max_size(self.config.pool_max_size)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| InfrastructureError::ConnectionUnavailable {
                message: e.to_string(),
            })
    }
}

/// A live storage connection bound to one tenant.
///
/// Owned by exactly one request. Dereferences to the underlying
/// [`tokio_postgres::Client`] for parameterized statements. Dropping the
/// connection returns it to its tenant's pool; because release rides on
/// `Drop`, no early return or error path can skip it, and it happens
/// exactly once.
pub struct TenantConnection {
    tenant_id: TenantId,
    client: Object,
}

impl TenantConnection {
    /// Returns the tenant this connection is bound to.
    pub fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}

impl Deref for TenantConnection {
    type Target = tokio_postgres::Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl fmt::Debug for TenantConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenantConnection")
            .field("tenant_id", &self.tenant_id)
            .finish_non_exhaustive()
    }
}
