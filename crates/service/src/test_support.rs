#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use configs::DatabaseConfig;
use models::db::{connect_in_memory, connect_with_config, migrate};

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

fn postgres_config() -> DatabaseConfig {
    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env();
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.min(1);
    cfg.acquire_timeout_secs = 10;
    cfg
}

/// Connection to the database named by `DATABASE_URL`, schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    // Run migrations exactly once, with a throwaway connection
    MIGRATED
        .get_or_try_init(|| async {
            let db = connect_with_config(&postgres_config()).await?;
            migrate(&db).await?;
            drop(db);
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    // Return a fresh connection for the current test's runtime
    connect_with_config(&postgres_config()).await
}

/// Private in-memory database per call.
pub async fn memory_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_in_memory().await
}
