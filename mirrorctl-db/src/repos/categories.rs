//! Category repository.
//!
//! Categories are created once (insert-ignore, keyed by name) and re-ordered
//! later by a name-keyed batch of sort updates.

use futures::future::try_join_all;
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::{CategorySort, NewCategory};

pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a category; an existing row (same name) wins, no error raised.
    pub async fn create(&self, category: &NewCategory) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, description, sort_index)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.description.as_deref())
        .bind(category.sort_index)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Apply sort positions keyed by name.
    ///
    /// Entries are independent and fan out concurrently; the call returns
    /// once all have settled, surfacing the first failure.
    pub async fn update_sort_indexes(&self, sorts: &[CategorySort]) -> DbResult<()> {
        try_join_all(sorts.iter().map(|sort| {
            sqlx::query("UPDATE categories SET sort_index = $1 WHERE name = $2")
                .bind(sort.sort_index)
                .bind(&sort.name)
                .execute(self.pool)
        }))
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_sort_batch_never_touches_the_database() {
        // A lazy pool has no live server behind it; any statement would fail.
        let pool = PgPool::connect_lazy("postgres://nobody@localhost:1/none")
            .expect("lazy pool");

        CategoryRepo::new(&pool)
            .update_sort_indexes(&[])
            .await
            .expect("empty batch should be a no-op");
    }
}
