//! User repository.

use futures::future::try_join_all;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::{NewUser, UserUpdate};

pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user; an existing row wins, no error raised.
    pub async fn create(&self, user: &NewUser) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, joined_at, post_count, reputation)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(user.joined_at)
        .bind(user.post_count)
        .bind(user.reputation)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Id of the first user with this name, if any mirrored yet.
    pub async fn id_by_name(&self, name: &str) -> DbResult<Option<i64>> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM users WHERE name = $1 LIMIT 1")
                .bind(name)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(|(id,)| id))
    }

    /// Apply per-id field updates.
    ///
    /// Each entry writes exactly its present fields; entries with nothing to
    /// set are skipped. Updates fan out concurrently and the call surfaces
    /// the first failure. An id matching no row updates zero rows and is
    /// still a success.
    pub async fn update_many(&self, updates: &[UserUpdate]) -> DbResult<()> {
        try_join_all(updates.iter().filter_map(|update| {
            let sql = update.update_sql()?;
            let pool = self.pool;

            Some(async move {
                let mut query = sqlx::query(&sql).bind(update.id);
                if let Some(name) = &update.name {
                    query = query.bind(name);
                }
                if let Some(post_count) = update.post_count {
                    query = query.bind(post_count);
                }
                if let Some(reputation) = update.reputation {
                    query = query.bind(reputation);
                }
                query.execute(pool).await
            })
        }))
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fieldless_updates_never_touch_the_database() {
        let pool = PgPool::connect_lazy("postgres://nobody@localhost:1/none")
            .expect("lazy pool");

        let updates = vec![
            UserUpdate {
                id: 1,
                ..Default::default()
            },
            UserUpdate {
                id: 2,
                ..Default::default()
            },
        ];
        UserRepo::new(&pool)
            .update_many(&updates)
            .await
            .expect("updates with no fields should be a no-op");
    }
}
