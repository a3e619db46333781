//! HTTP request handlers for the Strata REST API.
//!
//! - [`service_info`] - Service descriptor at the root path
//! - [`health`] - Health check and probe endpoints
//! - [`customers`] - Tenant-scoped customer record CRUD

pub mod customers;
pub mod health;
pub mod service_info;

// Re-export handlers for convenience
pub use customers::{
    create_customer_handler, delete_customer_handler, list_customers_handler,
    update_customer_handler,
};
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use service_info::service_info_handler;
