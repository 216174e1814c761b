use std::sync::Arc;

use redis::{Client, Connection, RedisResult};
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::sync::RwLock;

/// Connect to Postgres and run pending migrations.
pub async fn configure_postgresql(url: &Secret<String>) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(url.expose_secret()).await?;

    sqlx::migrate!().run(&pg_pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pg_pool)
}

/// Open a shared Redis connection for the session store.
pub fn configure_redis(redis_host_name: &str) -> RedisResult<Arc<RwLock<Connection>>> {
    let conn = get_redis_client(redis_host_name)?.get_connection()?;
    Ok(Arc::new(RwLock::new(conn)))
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
///
/// # Returns
/// Result containing the PgPool or an error
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

/// Create a Redis client
///
/// # Arguments
/// * `redis_hostname` - Redis server hostname
///
/// # Returns
/// Result containing the Redis client or an error
pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}
