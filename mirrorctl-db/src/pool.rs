//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is created once
//! by the host process and shared by reference with every repository.

use mirrorctl_core::MirrorConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low; the mirror issues short, independent statements.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/mirror").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create a pool from the loaded mirror configuration.
pub async fn create_pool_from_config(config: &MirrorConfig) -> Result<PgPool, sqlx::Error> {
    let max_connections = config
        .database
        .max_connections
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);
    create_pool_with_options(&config.database.url, max_connections).await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p mirrorctl-db

    const MIRRORED_TABLES: [&str; 6] =
        ["categories", "forums", "posts", "stats", "topics", "users"];

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_reaches_every_mirrored_table() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        crate::migrations::run(&pool).await.expect("migrations failed");

        for table in MIRRORED_TABLES {
            let _: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&pool)
                .await
                .expect("mirrored table should be queryable through the pool");
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_serves_a_concurrent_write_fan_out() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        crate::migrations::run(&pool).await.expect("migrations failed");

        // Same shape the batch repositories produce: independent per-row
        // statements racing for the pool's connections.
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    sqlx::query("UPDATE users SET reputation = reputation WHERE id = $1")
                        .bind(i as i64)
                        .execute(&pool)
                        .await
                        .expect("concurrent statement failed")
                })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task panicked");
        }
    }
}
