//! Stat repository.
//!
//! The one overwriting write path: stats are latest-known state, not
//! immutable history, so a conflicting `name` merges instead of being ignored.

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::DbResult;
use crate::models::StatEntry;

pub struct StatRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StatRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Batch upsert keyed by `name`: insert new rows, overwrite `value` and
    /// `mirrored_at` on existing ones.
    pub async fn upsert_many(&self, stats: &[StatEntry]) -> DbResult<()> {
        if stats.is_empty() {
            return Ok(());
        }

        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO stats (name, value, mirrored_at) ");
        qb.push_values(stats, |mut b, stat| {
            b.push_bind(&stat.name)
                .push_bind(stat.value)
                .push_bind(stat.mirrored_at);
        });
        qb.push(
            " ON CONFLICT (name) DO UPDATE \
             SET value = EXCLUDED.value, mirrored_at = EXCLUDED.mirrored_at",
        );

        qb.build().execute(self.pool).await?;
        tracing::debug!(count = stats.len(), "mirrored stat batch");

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

        StatRepo::new(&pool)
            .upsert_many(&[])
            .await
            .expect("empty batch should be a no-op");
    }
}
