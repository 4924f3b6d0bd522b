use std::sync::Arc;

use dotenvy::dotenv;
use user_directory::client::UserDirectoryClient;
use user_directory::user_lister::UserListerHttp;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Product catalog REST API entry point
///
/// - config/: environment-driven settings (server, CORS, store, user directory)
/// - setup/: dependency wiring and the poem server
/// - api/: OpenAPI routes, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env();

    let product_repository = database_config::init_store(&config.database).await?;
    let user_service = Arc::new(UserListerHttp::new(UserDirectoryClient::new(
        config.user_directory.users_url.clone(),
    )));

    let container = DependencyContainer::new(product_repository, user_service);

    Server::run(config, container).await
}
