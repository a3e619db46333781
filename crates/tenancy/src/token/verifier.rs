//! Bearer credential verification.

use std::fmt;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde_json::Value;

use crate::error::AuthenticationError;
use crate::tenant::TenantId;

use super::TENANT_ID_CLAIM;

/// Verifies bearer credentials and extracts the tenant identity claim.
///
/// A verifier is a pure function of its process-wide secret: it performs
/// no I/O and keeps no per-request state, so one instance serves all
/// requests concurrently.
///
/// The verification chain is fail-closed. Each step either produces the
/// input for the next step or terminates with an
/// [`AuthenticationError`]; no partial trust is ever granted:
///
/// 1. Header presence: absent or blank fails as `MissingCredential`
/// 2. Scheme decomposition: anything but `Bearer <token>` fails as
///    `MalformedCredential`
/// 3. Integrity: HS256 signature check against the shared secret;
///    mismatched signatures and mismatched algorithms fail as
///    `InvalidSignature`
/// 4. Claim extraction: a verified payload without a usable `tenant_id`
///    fails as `MissingClaim`
///
/// # Examples
///
/// ```
/// use strata_tenancy::tenant::TenantId;
/// use strata_tenancy::token::{TokenIssuer, TokenVerifier};
///
/// let issuer = TokenIssuer::new("demo-secret");
/// let verifier = TokenVerifier::new("demo-secret");
///
/// let token = issuer.issue(&TenantId::new("acme")).unwrap();
/// let header = format!("Bearer {}", token);
///
/// let tenant = verifier.verify(Some(&header)).unwrap();
/// assert_eq!(tenant.as_str(), "acme");
/// ```
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("algorithms", &self.validation.algorithms)
            .finish_non_exhaustive()
    }
}

impl TokenVerifier {
    /// Creates a verifier pinned to HS256 with the given shared secret.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry only the tenant identity claim; registered claims
        // like exp/aud are the issuer's policy, not this boundary's.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        let no_required_claims: &[&str] = &[];
        validation.set_required_spec_claims(no_required_claims);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies an `Authorization` header value and returns the asserted
    /// tenant identity.
    ///
    /// Takes the raw header value (`None` when the header was absent).
    /// Never trusts any part of the payload before the signature check
    /// has passed.
    pub fn verify(&self, header: Option<&str>) -> Result<TenantId, AuthenticationError> {
        let token = bearer_token(header)?;

        let decoded = decode::<Value>(token, &self.decoding_key, &self.validation)
            .map_err(classify_jwt_error)?;

        tenant_claim(&decoded.claims)
    }
}

/// Splits an `Authorization` header value into its bearer token material.
fn bearer_token(header: Option<&str>) -> Result<&str, AuthenticationError> {
    let header = match header.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthenticationError::MissingCredential),
    };

    // Match `<scheme> <token>`; a value without a scheme prefix does not
    // decompose into the expected bearer structure.
    let (scheme, token) = header
        .split_once(' ')
        .ok_or(AuthenticationError::MalformedCredential)?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(AuthenticationError::MalformedCredential);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthenticationError::MissingCredential);
    }

    Ok(token)
}

/// Extracts the tenant identity claim from a verified payload.
///
/// The claim is accepted as a JSON string or integer and normalized to
/// its string form. Only called after the signature check has passed.
fn tenant_claim(claims: &Value) -> Result<TenantId, AuthenticationError> {
    match claims.get(TENANT_ID_CLAIM) {
        Some(Value::String(id)) if !id.is_empty() => Ok(TenantId::new(id)),
        Some(Value::Number(id)) => Ok(TenantId::new(id.to_string())),
        _ => Err(AuthenticationError::MissingClaim),
    }
}

/// Maps `jsonwebtoken` failures onto the authentication taxonomy.
fn classify_jwt_error(err: jsonwebtoken::errors::Error) -> AuthenticationError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        // The token text itself is not decodable as a JWT.
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => AuthenticationError::MalformedCredential,
        // Signature mismatches, algorithm mismatches, and any kind this
        // version does not enumerate all fail closed as integrity
        // failures.
        _ => AuthenticationError::InvalidSignature,
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    use crate::token::TokenIssuer;

    use super::*;

    const SECRET: &str = "test-secret";

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(SECRET)
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }

    fn issue(tenant: &str) -> String {
        TokenIssuer::new(SECRET)
            .issue(&TenantId::new(tenant))
            .unwrap()
    }

    #[test]
    fn test_valid_token_yields_tenant() {
        let header = bearer(&issue("acme"));
        let tenant = verifier().verify(Some(&header)).unwrap();
        assert_eq!(tenant.as_str(), "acme");
    }

    #[test]
    fn test_numeric_claim_is_normalized() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "tenant_id": 7 }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let tenant = verifier().verify(Some(&bearer(&token))).unwrap();
        assert_eq!(tenant.as_str(), "7");
    }

    #[test]
    fn test_missing_header() {
        let err = verifier().verify(None).unwrap_err();
        assert!(matches!(err, AuthenticationError::MissingCredential));
    }

    #[test]
    fn test_blank_header() {
        let err = verifier().verify(Some("   ")).unwrap_err();
        assert!(matches!(err, AuthenticationError::MissingCredential));
    }

    #[test]
    fn test_empty_token_material() {
        let err = verifier().verify(Some("Bearer ")).unwrap_err();
        assert!(matches!(err, AuthenticationError::MissingCredential));
    }

    #[test]
    fn test_wrong_scheme() {
        let err = verifier().verify(Some("Basic abc")).unwrap_err();
        assert!(matches!(err, AuthenticationError::MalformedCredential));
    }

    #[test]
    fn test_schemeless_value() {
        let err = verifier().verify(Some(&issue("acme"))).unwrap_err();
        assert!(matches!(err, AuthenticationError::MalformedCredential));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let header = format!("bearer {}", issue("acme"));
        let tenant = verifier().verify(Some(&header)).unwrap();
        assert_eq!(tenant.as_str(), "acme");
    }

    #[test]
    fn test_garbage_token() {
        let err = verifier().verify(Some("Bearer not-a-jwt")).unwrap_err();
        assert!(matches!(err, AuthenticationError::MalformedCredential));
    }

    #[test]
    fn test_tampered_signature() {
        let token = issue("acme");
        let (head, signature) = token.rsplit_once('.').unwrap();

        // Flip a bit in the first character of the signature segment.
        // (The last character also carries padding bits, which strict
        // decoding reports as malformed rather than as a bad signature.)
        let mut sig: Vec<u8> = signature.bytes().collect();
        sig[0] = if sig[0] == b'A' { b'B' } else { b'A' };
        let tampered = format!("{}.{}", head, String::from_utf8(sig).unwrap());
        assert_ne!(tampered, token);

        let err = verifier().verify(Some(&bearer(&tampered))).unwrap_err();
        assert!(matches!(err, AuthenticationError::InvalidSignature));
    }

    #[test]
    fn test_wrong_secret() {
        let token = TokenIssuer::new("some-other-secret")
            .issue(&TenantId::new("acme"))
            .unwrap();

        let err = verifier().verify(Some(&bearer(&token))).unwrap_err();
        assert!(matches!(err, AuthenticationError::InvalidSignature));
    }

    #[test]
    fn test_unsigned_algorithm_rejected() {
        // Hand-craft an `alg: none` token; no verifier configuration may
        // ever accept it.
        let header = URL_SAFE_NO_PAD.encode(r#"{"typ":"JWT","alg":"none"}"#);
        let payload = URL_SAFE_NO_PAD.encode(json!({ "tenant_id": "acme" }).to_string());
        let token = format!("{}.{}.", header, payload);

        let err = verifier().verify(Some(&bearer(&token))).unwrap_err();
        assert!(matches!(
            err,
            AuthenticationError::MalformedCredential | AuthenticationError::InvalidSignature
        ));
    }

    #[test]
    fn test_foreign_algorithm_rejected() {
        // Signed with the right secret but the wrong algorithm; the
        // pinned validation must refuse it.
        let token = encode(
            &Header::new(Algorithm::HS384),
            &json!({ "tenant_id": "acme" }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = verifier().verify(Some(&bearer(&token))).unwrap_err();
        assert!(matches!(err, AuthenticationError::InvalidSignature));
    }

    #[test]
    fn test_missing_claim() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "subject": "nobody" }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = verifier().verify(Some(&bearer(&token))).unwrap_err();
        assert!(matches!(err, AuthenticationError::MissingClaim));
    }

    #[test]
    fn test_null_claim_is_missing() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "tenant_id": null }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = verifier().verify(Some(&bearer(&token))).unwrap_err();
        assert!(matches!(err, AuthenticationError::MissingClaim));
    }

    #[test]
    fn test_empty_string_claim_is_missing() {
        let token = encode(
            &Header::new(Algorithm::HS256),
            &json!({ "tenant_id": "" }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = verifier().verify(Some(&bearer(&token))).unwrap_err();
        assert!(matches!(err, AuthenticationError::MissingClaim));
    }
}
