//! Tenant-scoped data access.
//!
//! Every function in this module takes a
//! [`TenantConnection`](strata_tenancy::pool::TenantConnection) and runs
//! parameterized statements through it. The connection's principal, and
//! the storage endpoint's row-level-security policy keyed on it, bound
//! what each statement can see, so there is no tenant filtering to get
//! wrong here.

pub mod customers;
