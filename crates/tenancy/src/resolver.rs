//! Tenant context resolution.
//!
//! Composes the token verifier, tenant registry, and connection provider
//! into the single entry point dispatchers call once per request.

use tracing::debug;

use crate::error::ResolveError;
use crate::pool::{ConnectionProvider, TenantConnection};
use crate::tenant::TenantRegistry;
use crate::token::TokenVerifier;

/// Turns an inbound bearer credential into a tenant-scoped connection.
///
/// The resolver shields dispatchers from the staged process: verify the
/// credential, look up the tenant's principal, open a connection as that
/// principal. The chain is fail-fast. The first failure propagates
/// verbatim, and a failed identity check can never fall through to a
/// different tenant or a default connection.
///
/// Nothing is cached across requests on the credential-to-connection path:
/// every request re-verifies its credential. The registry itself is an
/// immutable in-memory map, and the provider reuses per-tenant pools, so
/// re-verification is the only per-request cost.
///
/// There are exactly two terminal states: a usable [`TenantConnection`]
/// or a categorized [`ResolveError`].
#[derive(Debug)]
pub struct TenantResolver {
    verifier: TokenVerifier,
    registry: TenantRegistry,
    provider: ConnectionProvider,
}

impl TenantResolver {
    /// Creates a resolver from its three collaborators.
    ///
    /// The verifier's secret and the registry's roster are injected here
    /// explicitly, with no ambient configuration, so tests can construct
    /// resolvers with alternate secrets and rosters.
    pub fn new(
        verifier: TokenVerifier,
        registry: TenantRegistry,
        provider: ConnectionProvider,
    ) -> Self {
        Self {
            verifier,
            registry,
            provider,
        }
    }

    /// Resolves an `Authorization` header value into a scoped connection.
    ///
    /// `credential` is the raw header value, `None` when the header was
    /// absent. On success the returned connection is authenticated as
    /// the asserted tenant's own principal; on failure no connection was
    /// opened.
    pub async fn resolve(
        &self,
        credential: Option<&str>,
    ) -> Result<TenantConnection, ResolveError> {
        let tenant_id = self.verifier.verify(credential)?;
        let credentials = self.registry.credentials(&tenant_id)?;
        let connection = self.provider.acquire(&tenant_id, credentials).await?;

        debug!(tenant_id = %tenant_id, "resolved tenant context");
        Ok(connection)
    }

    /// Returns the tenant registry.
    pub fn registry(&self) -> &TenantRegistry {
        &self.registry
    }

    /// Returns the connection provider.
    pub fn provider(&self) -> &ConnectionProvider {
        &self.provider
    }
}
