//! Bearer token verification and issuance.
//!
//! # Core Types
//!
//! - [`TokenVerifier`] - Validates a bearer credential and extracts the
//!   tenant identity claim
//! - [`TokenIssuer`] - Signs tokens for provisioned tenants (the
//!   counterpart used by provisioning tooling and tests)
//!
//! # Algorithm Policy
//!
//! Verification is pinned to HMAC-SHA-256 against a process-wide secret.
//! The algorithm is never negotiated from the token itself: a token that
//! names any other algorithm, including the `none` designation, is
//! rejected outright. Accepting an attacker-chosen algorithm would turn
//! the integrity check into a forgeable bypass.

mod issuer;
mod verifier;

pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;

/// Name of the JWT claim carrying the tenant identity.
pub const TENANT_ID_CLAIM: &str = "tenant_id";
