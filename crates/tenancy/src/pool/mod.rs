//! Per-tenant storage connection pooling.
//!
//! # Core Types
//!
//! - [`DatabaseConfig`] - The shared endpoint (process-wide constants)
//! - [`ConnectionProvider`] - Lazily created pool per tenant, keyed by
//!   tenant identity only
//! - [`TenantConnection`] - An owned, scoped connection that returns to
//!   its pool on drop
//!
//! Release is structural: a [`TenantConnection`] cannot outlive its
//! request without being returned, because the return rides on `Drop`.

mod config;
mod provider;

pub use config::DatabaseConfig;
pub use provider::{ConnectionProvider, TenantConnection};
