//! Entry entity - a single post belonging to a blog

use chrono::{DateTime, Utc};

use crate::entities::Reaction;
use crate::value_objects::Snowflake;

/// Entry entity
///
/// An entry belongs to exactly one blog. For any persisted entry the mood
/// validator guarantees its reaction and text agree with the parent blog's
/// polarity (unless the blog could not be resolved at write time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: Snowflake,
    pub blog_id: Snowflake,
    pub reaction: Reaction,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create a new Entry
    pub fn new(
        id: Snowflake,
        blog_id: Snowflake,
        reaction: Reaction,
        title: String,
        content: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            blog_id,
            reaction,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields wholesale (full-replace update semantics)
    pub fn replace(&mut self, reaction: Reaction, title: String, content: String) {
        self.reaction = reaction;
        self.title = title;
        self.content = content;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = Entry::new(
            Snowflake::new(1),
            Snowflake::new(100),
            Reaction::Like,
            "Great day".to_string(),
            "so happy".to_string(),
        );
        assert_eq!(entry.blog_id, Snowflake::new(100));
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn test_entry_replace() {
        let mut entry = Entry::new(
            Snowflake::new(1),
            Snowflake::new(100),
            Reaction::Like,
            "Before".to_string(),
            "old".to_string(),
        );
        entry.replace(Reaction::Haha, "After".to_string(), "new".to_string());
        assert_eq!(entry.reaction, Reaction::Haha);
        assert_eq!(entry.title, "After");
        assert!(entry.updated_at >= entry.created_at);
    }
}
