//! Strata
//!
//! A multi-tenant record service: bearer-token authentication, a static
//! tenant registry, and per-tenant PostgreSQL principals over one shared
//! database.

use clap::Parser;
use strata_rest::{ServerConfig, create_app_with_config, init_logging};
use strata_tenancy::pool::ConnectionProvider;
use strata_tenancy::resolver::TenantResolver;
use strata_tenancy::tenant::TenantRegistry;
use strata_tenancy::token::TokenVerifier;
use tracing::info;

/// Builds the tenant resolver from the server configuration.
///
/// `validate()` has already established that the secret and roster path
/// are present.
fn create_resolver(config: &ServerConfig) -> anyhow::Result<TenantResolver> {
    let secret = config
        .token_secret
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("token secret is not configured"))?;
    let roster_path = config
        .tenant_roster
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("tenant roster path is not configured"))?;

    let registry = TenantRegistry::load(roster_path)?;
    info!(
        roster = %roster_path.display(),
        tenants = registry.len(),
        "Loaded tenant registry"
    );

    let provider = ConnectionProvider::new(config.database_config());

    Ok(TenantResolver::new(
        TokenVerifier::new(secret),
        registry,
        provider,
    ))
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        database = %config.db_name,
        "Starting Strata server"
    );

    let resolver = create_resolver(&config)?;
    let app = create_app_with_config(resolver, config.clone());
    serve(app, &config).await
}
