//! Entry database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the entries table
///
/// The reaction tag is stored in its canonical wire form (e.g. "LIKE").
#[derive(Debug, Clone, FromRow)]
pub struct EntryModel {
    pub id: i64,
    pub blog_id: i64,
    pub reaction: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
