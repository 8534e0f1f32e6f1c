//! Payload types handed to the repositories.
//!
//! These mirror upstream records as the scraper delivers them (JSON), so they
//! all derive serde. Upstream timestamps are epoch milliseconds; the
//! placeholder sentinel covers unresolved ids and timestamps alike.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Satisfies not-null constraints we'll fill in at a later step.
///
/// Never denotes a real entity: a topic holding it for `author_id` or
/// `created_at` is pending resolution and eligible for a conditional patch.
pub const PLACEHOLDER_ID: i64 = 0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub sort_index: i32,
}

/// Sort position keyed by category name, applied after the categories exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySort {
    pub name: String,
    pub sort_index: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewForum {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub id: i64,
    pub topic_id: i64,
    #[serde(default)]
    pub author_id: i64,
    pub content: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Latest-known value for a named counter, stamped with the mirror time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub value: i64,
    pub mirrored_at: DateTime<Utc>,
}

impl StatEntry {
    /// Stat entry stamped with the current wall clock.
    pub fn now(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            mirrored_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTopic {
    pub id: i64,
    pub forum_id: i64,
    pub title: String,
    #[serde(default)]
    pub author_id: i64,
    #[serde(default)]
    pub created_at: i64,
}

/// Resolved values for a topic inserted with placeholders.
///
/// Absent fields (and placeholder values, which would be a no-op anyway)
/// produce no update statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicPatch {
    pub id: i64,
    pub author_id: Option<i64>,
    pub created_at: Option<i64>,
}

impl TopicPatch {
    /// Columns to patch, with their resolved values.
    pub(crate) fn pending_fields(&self) -> Vec<(&'static str, i64)> {
        [
            ("author_id", self.author_id),
            ("created_at", self.created_at),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .filter(|(_, value)| *value != PLACEHOLDER_ID)
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub joined_at: i64,
    #[serde(default)]
    pub post_count: i64,
    #[serde(default)]
    pub reputation: i64,
}

/// Per-id field update; only the present fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub id: i64,
    pub name: Option<String>,
    pub post_count: Option<i64>,
    pub reputation: Option<i64>,
}

impl UserUpdate {
    /// Build the UPDATE statement covering exactly the present fields.
    ///
    /// `$1` is always the row id; the remaining placeholders follow field
    /// declaration order, which is also the order the repository binds in.
    /// Returns `None` when there is nothing to set.
    pub(crate) fn update_sql(&self) -> Option<String> {
        let mut sets = Vec::new();
        let mut next = 2;

        if self.name.is_some() {
            sets.push(format!("name = ${next}"));
            next += 1;
        }
        if self.post_count.is_some() {
            sets.push(format!("post_count = ${next}"));
            next += 1;
        }
        if self.reputation.is_some() {
            sets.push(format!("reputation = ${next}"));
        }

        if sets.is_empty() {
            return None;
        }

        Some(format!(
            "UPDATE users SET {} WHERE id = $1",
            sets.join(", ")
        ))
    }
}
