//! Authorization header extractor.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

/// Axum extractor for the raw `Authorization` header value.
///
/// Deliberately does not interpret the value: scheme parsing, signature
/// verification, and the full denial taxonomy live in the core's
/// verifier, so every request flows through the same resolution chain
/// whether or not it carries a header. An absent header extracts as
/// `None` and becomes a `MissingCredential` denial inside the core.
///
/// # Example
///
/// ```rust,ignore
/// use strata_rest::extractors::BearerHeader;
///
/// async fn handler(bearer: BearerHeader) {
///     println!("credential present: {}", bearer.credential().is_some());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BearerHeader(Option<String>);

impl BearerHeader {
    /// Returns the raw header value, if one was presented.
    pub fn credential(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Extracts the `Authorization` header value from a header map.
///
/// A header with non-UTF-8 bytes extracts as `None`; it cannot name a
/// valid credential and is denied as missing.
fn extract_authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

impl<S> FromRequestParts<S> for BearerHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(BearerHeader(extract_authorization(&parts.headers)))
    }
}
