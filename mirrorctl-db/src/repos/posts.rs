//! Post repository.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::DbResult;
use crate::models::NewPost;

pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Batch insert; rows already mirrored are skipped, never overwritten.
    pub async fn create_many(&self, posts: &[NewPost]) -> DbResult<()> {
        if posts.is_empty() {
            return Ok(());
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO posts (id, topic_id, author_id, content, created_at) ",
        );
        qb.push_values(posts, |mut b, post| {
            b.push_bind(post.id)
                .push_bind(post.topic_id)
                .push_bind(post.author_id)
                .push_bind(&post.content)
                .push_bind(post.created_at);
        });
        qb.push(" ON CONFLICT DO NOTHING");

        qb.build().execute(self.pool).await?;
        tracing::debug!(count = posts.len(), "mirrored post batch");

        Ok(())
    }
}
