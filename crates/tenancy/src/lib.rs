//! Strata Tenant Isolation Core
//!
//! This crate is the tenant isolation boundary of the Strata record
//! service: it authenticates callers via bearer tokens, maps each caller
//! to a provisioned tenant, and hands out storage connections bound to
//! that tenant's own database principal, composed so that no code path
//! can cross tenant boundaries, even under error conditions.
//!
//! # Resolution Chain
//!
//! ```text
//! credential -(verify)-> tenant id -(lookup)-> credential set -(open)-> scoped connection
//! ```
//!
//! Each arrow is a one-way, fail-closed transformation: failure at any
//! stage terminates the chain and no connection is produced. The stages
//! are:
//!
//! - [`token::TokenVerifier`] - HS256-pinned bearer token verification
//! - [`tenant::TenantRegistry`] - Immutable tenant-to-principal mapping
//! - [`pool::ConnectionProvider`] - Per-tenant pools over one shared
//!   PostgreSQL endpoint
//! - [`resolver::TenantResolver`] - The composition, called once per
//!   request
//!
//! # Defense in Depth
//!
//! This crate is the application-side half of tenant isolation. The
//! storage endpoint's own row-level-security policy, keyed by the
//! authenticated principal, enforces the same boundary underneath it.
//! The provider's job is strictly to authenticate as the *correct*
//! principal; it never widens what that principal can see.
//!
//! # Quick Start
//!
//! ```no_run
//! use strata_tenancy::pool::{ConnectionProvider, DatabaseConfig};
//! use strata_tenancy::resolver::TenantResolver;
//! use strata_tenancy::tenant::TenantRegistry;
//! use strata_tenancy::token::TokenVerifier;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = TenantRegistry::builder()
//!     .tenant("acme", "tenant_acme", "password_a")
//!     .build()?;
//!
//! let resolver = TenantResolver::new(
//!     TokenVerifier::new("process-wide-secret"),
//!     registry,
//!     ConnectionProvider::new(DatabaseConfig::default()),
//! );
//!
//! // Once per request:
//! let conn = resolver.resolve(Some("Bearer eyJ...")).await?;
//! let rows = conn.query("SELECT name FROM customers", &[]).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Taxonomy
//!
//! Failures carry their category ([`error::ErrorCategory`]) so
//! dispatchers can map authentication to 401, authorization to 403, and
//! infrastructure to 503 without inspecting individual variants, and
//! without leaking which stage denied a request.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pool;
pub mod resolver;
pub mod tenant;
pub mod token;

// Re-export commonly used types
pub use error::{
    AuthenticationError, AuthorizationError, ErrorCategory, InfrastructureError, ResolveError,
};
pub use pool::{ConnectionProvider, DatabaseConfig, TenantConnection};
pub use resolver::TenantResolver;
pub use tenant::{TenantCredentials, TenantId, TenantRegistry};
pub use token::{TokenIssuer, TokenVerifier};
