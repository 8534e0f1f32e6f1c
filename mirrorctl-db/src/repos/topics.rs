//! Topic repository.
//!
//! Topics may arrive before the user they reference has been mirrored, so
//! `author_id` and `created_at` are inserted with the placeholder and patched
//! once the real values are known. The patch is a conditional update
//! (`WHERE field = placeholder`), not a read-then-write, so a field already
//! resolved is never overwritten even under concurrent patchers.

use futures::future::try_join_all;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::DbResult;
use crate::models::{NewTopic, TopicPatch, PLACEHOLDER_ID};

pub struct TopicRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TopicRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Batch insert; rows already mirrored are skipped, never overwritten.
    pub async fn create_many(&self, topics: &[NewTopic]) -> DbResult<()> {
        if topics.is_empty() {
            return Ok(());
        }

        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO topics (id, forum_id, title, author_id, created_at) ",
        );
        qb.push_values(topics, |mut b, topic| {
            b.push_bind(topic.id)
                .push_bind(topic.forum_id)
                .push_bind(&topic.title)
                .push_bind(topic.author_id)
                .push_bind(topic.created_at);
        });
        qb.push(" ON CONFLICT DO NOTHING");

        qb.build().execute(self.pool).await?;
        tracing::debug!(count = topics.len(), "mirrored topic batch");

        Ok(())
    }

    /// Fill in placeholder fields on one topic row.
    ///
    /// Each present field updates only if the stored value is still exactly
    /// the placeholder; the per-field updates run concurrently and the first
    /// failure wins.
    pub async fn patch_placeholders(&self, patch: &TopicPatch) -> DbResult<()> {
        try_join_all(patch.pending_fields().into_iter().map(|(column, value)| {
            // Column names come from the fixed list above, never from input.
            let sql = format!(
                "UPDATE topics SET {column} = $1 WHERE id = $2 AND {column} = $3"
            );
            let pool = self.pool;
            let id = patch.id;

            async move {
                sqlx::query(&sql)
                    .bind(value)
                    .bind(id)
                    .bind(PLACEHOLDER_ID)
                    .execute(pool)
                    .await
            }
        }))
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fieldless_patch_never_touches_the_database() {
        let pool = PgPool::connect_lazy("postgres://nobody@localhost:1/none")
            .expect("lazy pool");

        let patch = TopicPatch {
            id: 5,
            ..Default::default()
        };
        TopicRepo::new(&pool)
            .patch_placeholders(&patch)
            .await
            .expect("patch with no fields should be a no-op");
    }
}
