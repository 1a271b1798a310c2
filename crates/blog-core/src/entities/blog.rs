//! Blog entity - a collection of entries with a declared sentiment polarity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Sentiment polarity declared by a blog
///
/// Every blog commits to one polarity; the mood validator holds its entries
/// to it. The validator treats this as a read-only input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// The opposing polarity
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// Blog entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: Snowflake,
    pub name: String,
    pub handle: String,
    pub polarity: Polarity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new Blog
    pub fn new(id: Snowflake, name: String, handle: String, polarity: Polarity) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            handle,
            polarity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields, bumping `updated_at`
    pub fn replace(&mut self, name: String, handle: String, polarity: Polarity) {
        self.name = name;
        self.handle = handle;
        self.polarity = polarity;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_opposite() {
        assert_eq!(Polarity::Positive.opposite(), Polarity::Negative);
        assert_eq!(Polarity::Negative.opposite(), Polarity::Positive);
    }

    #[test]
    fn test_polarity_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Polarity::Positive).unwrap(),
            "\"positive\""
        );
        let parsed: Polarity = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(parsed, Polarity::Negative);
    }

    #[test]
    fn test_blog_creation() {
        let blog = Blog::new(
            Snowflake::new(1),
            "Daily Sunshine".to_string(),
            "sunshine".to_string(),
            Polarity::Positive,
        );
        assert!(blog.polarity.is_positive());
        assert_eq!(blog.created_at, blog.updated_at);
    }
}
