//! Forum repository.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::DbResult;
use crate::models::NewForum;

pub struct ForumRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ForumRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Batch insert; rows already mirrored are skipped, never overwritten.
    pub async fn create_many(&self, forums: &[NewForum]) -> DbResult<()> {
        if forums.is_empty() {
            return Ok(());
        }

        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO forums (id, category_id, name, description) ");
        qb.push_values(forums, |mut b, forum| {
            b.push_bind(forum.id)
                .push_bind(forum.category_id)
                .push_bind(&forum.name)
                .push_bind(forum.description.as_deref());
        });
        qb.push(" ON CONFLICT DO NOTHING");

        qb.build().execute(self.pool).await?;
        tracing::debug!(count = forums.len(), "mirrored forum batch");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_batch_never_touches_the_database() {
        let pool = PgPool::connect_lazy("postgres://nobody@localhost:1/none")
            .expect("lazy pool");

        ForumRepo::new(&pool)
            .create_many(&[])
            .await
            .expect("empty batch should be a no-op");
    }
}
