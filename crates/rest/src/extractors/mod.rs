//! Axum extractors for the Strata REST API.
//!
//! - [`BearerHeader`] - The raw `Authorization` header value

mod bearer;

pub use bearer::BearerHeader;
