//! Bearer token issuance.

use std::fmt;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;

use crate::tenant::TenantId;

use super::TENANT_ID_CLAIM;

/// Signs bearer tokens for provisioned tenants.
///
/// The issuing counterpart of
/// [`TokenVerifier`](crate::token::TokenVerifier): same secret, same
/// pinned HS256 algorithm. Provisioning tooling uses it to mint tenant
/// tokens; tests use it to produce credentials the verifier accepts.
///
/// # Examples
///
/// ```
/// use strata_tenancy::tenant::TenantId;
/// use strata_tenancy::token::TokenIssuer;
///
/// let issuer = TokenIssuer::new("demo-secret");
/// let token = issuer.issue(&TenantId::new("acme")).unwrap();
/// assert_eq!(token.matches('.').count(), 2);
/// ```
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &self.header.alg)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Creates an issuer signing with HS256 and the given shared secret.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            header: Header::new(Algorithm::HS256),
        }
    }

    /// Issues a signed token asserting the given tenant identity.
    pub fn issue(&self, tenant_id: &TenantId) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = json!({ TENANT_ID_CLAIM: tenant_id.as_str() });
        encode(&self.header, &claims, &self.encoding_key)
    }
}
