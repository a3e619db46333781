//! Tenant identity and provisioning.
//!
//! # Core Types
//!
//! - [`TenantId`] - Opaque tenant identifier
//! - [`TenantCredentials`] - The storage principal dedicated to one tenant
//! - [`TenantRegistry`] - Immutable tenant-to-credentials mapping, loaded once
//!   at process start
//!
//! The registry is deliberately static: the tenant roster is configuration,
//! not data. Provisioning a tenant means adding a roster entry and
//! restarting; nothing in the request path can grow or mutate the roster.

mod credentials;
mod id;
mod registry;

pub use credentials::TenantCredentials;
pub use id::TenantId;
pub use registry::{RosterEntry, RosterError, TenantRegistry, TenantRegistryBuilder};
