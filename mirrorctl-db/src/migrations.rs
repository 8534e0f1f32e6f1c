//! Bootstrap migrations for the mirrored tables.
//!
//! No foreign keys between mirrored tables: rows arrive in upstream order and
//! may forward-reference rows that have not been mirrored yet. That is what
//! the placeholder id exists for.

use sqlx::PgPool;

use crate::error::DbResult;

/// Run all mirror migrations
pub async fn run(pool: &PgPool) -> DbResult<()> {
    tracing::info!("Running mirror migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id BIGINT PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            sort_index INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS forums (
            id BIGINT PRIMARY KEY,
            category_id BIGINT NOT NULL,
            name TEXT NOT NULL,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // author_id and created_at default to the placeholder; they are patched
    // once the referenced user has been mirrored.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS topics (
            id BIGINT PRIMARY KEY,
            forum_id BIGINT NOT NULL,
            title TEXT NOT NULL,
            author_id BIGINT NOT NULL DEFAULT 0,
            created_at BIGINT NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id BIGINT PRIMARY KEY,
            topic_id BIGINT NOT NULL,
            author_id BIGINT NOT NULL DEFAULT 0,
            content TEXT NOT NULL,
            created_at BIGINT NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGINT PRIMARY KEY,
            name TEXT NOT NULL,
            joined_at BIGINT NOT NULL DEFAULT 0,
            post_count BIGINT NOT NULL DEFAULT 0,
            reputation BIGINT NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stats (
            name TEXT PRIMARY KEY,
            value BIGINT NOT NULL,
            mirrored_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Mirror migrations complete");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> DbResult<()> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_forums_category ON forums(category_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_topics_forum ON topics(forum_id)")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_topics_pending ON topics(id) WHERE author_id = 0",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_topic ON posts(topic_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_name ON users(name)")
        .execute(pool)
        .await?;

    Ok(())
}
