use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// Connection pool for the engagement store. The acquire timeout keeps a
/// saturated pool from stalling toggle requests indefinitely.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;
    tracing::info!(max_connections, "database pool ready");
    Ok(pool)
}
