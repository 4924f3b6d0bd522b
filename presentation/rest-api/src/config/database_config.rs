use std::env;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::in_memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Product store settings
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (optional)
    /// - DATABASE_MIGRATIONS: migrations directory
    ///   (default: "./infrastructure/persistence/migrations")
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            migrations_path: env::var("DATABASE_MIGRATIONS")
                .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string()),
        }
    }
}

/// Builds the product store
///
/// Connects to PostgreSQL and applies migrations when a database URL is
/// configured, otherwise falls back to the in-memory store.
///
/// # Errors
/// Returns error if the connection or the migrations fail
pub async fn init_store(settings: &DatabaseSettings) -> anyhow::Result<Arc<dyn ProductRepository>> {
    let Some(url) = &settings.url else {
        tracing::warn!("DATABASE_URL not set, products are kept in memory only");
        return Ok(Arc::new(ProductRepositoryInMemory::new()));
    };

    let pool = create_postgres_pool(&DatabaseConfig::new(url.clone())).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!("connected to postgres product store");

    Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_fall_back_to_in_memory_store_when_url_is_missing() {
        let settings = DatabaseSettings {
            url: None,
            migrations_path: DEFAULT_MIGRATIONS_PATH.to_string(),
        };

        let store = init_store(&settings).await.unwrap();

        assert!(store.find_all().await.unwrap().is_empty());
    }
}
