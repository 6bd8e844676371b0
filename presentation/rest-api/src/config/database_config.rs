use std::env;
use std::sync::Arc;

use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, ensure_schema};
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which product store backs the service
#[derive(Debug, Clone, PartialEq)]
pub enum StoreConfig {
    Postgres {
        url: String,
        max_connections: u32,
    },
    InMemory,
}

impl StoreConfig {
    /// Load store configuration from environment variables
    ///
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string; when unset the in-memory store is used
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
        )
    }

    fn from_values(url: Option<String>, max_connections: Option<String>) -> Self {
        match url.filter(|u| !u.trim().is_empty()) {
            Some(url) => Self::Postgres {
                url,
                max_connections: max_connections
                    .and_then(|m| m.parse().ok())
                    .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            },
            None => Self::InMemory,
        }
    }
}

/// Initialize the product store selected by `StoreConfig`
///
/// For PostgreSQL the `products` table is created when missing.
///
/// # Errors
/// Returns error if the database connection or table creation fails
pub async fn init_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match config {
        StoreConfig::Postgres {
            url,
            max_connections,
        } => {
            let db_config =
                DatabaseConfig::new(url.clone()).with_max_connections(*max_connections);
            let pool = create_postgres_pool(&db_config).await?;
            ensure_schema(&pool).await?;
            tracing::info!(max_connections, "using PostgreSQL product store");
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
        StoreConfig::InMemory => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory only");
            Ok(Arc::new(ProductRepositoryInMemory::new()))
        }
    }
}
