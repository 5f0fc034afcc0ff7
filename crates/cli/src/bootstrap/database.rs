use solcasa_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(database_url: &str) -> anyhow::Result<SqlitePool> {
    info!("Initializing cache database: {}", database_url);

    let pool = create_pool(database_url).await.map_err(|e| {
        error!("Failed to initialize cache database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!("Cache database initialized successfully");
    Ok(pool)
}
