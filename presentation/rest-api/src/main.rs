use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, jwt_config, search_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point
///
/// - config/: environment driven settings (server, CORS, search backend, tokens)
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    let jwt = jwt_config::JwtConfig::from_env()?;

    // 4. Connect the search backend and resolve the token key
    let search_client = search_config::init_search().await?;
    let verifier = jwt_config::init_token_verifier(jwt).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(search_client, verifier, config.request_timeout);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
