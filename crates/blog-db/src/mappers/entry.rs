//! Entry entity <-> model mapper

use blog_core::entities::{Entry, Reaction};
use blog_core::error::DomainError;
use blog_core::value_objects::Snowflake;

use crate::models::EntryModel;

/// Convert an EntryModel row into an Entry entity
///
/// Fails with a database error if the stored reaction tag is outside the
/// vocabulary, which would indicate a corrupted row.
pub fn entry_from_model(model: EntryModel) -> Result<Entry, DomainError> {
    let reaction = model
        .reaction
        .parse::<Reaction>()
        .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

    Ok(Entry {
        id: Snowflake::new(model.id),
        blog_id: Snowflake::new(model.blog_id),
        reaction,
        title: model.title,
        content: model.content,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(reaction: &str) -> EntryModel {
        let now = Utc::now();
        EntryModel {
            id: 1,
            blog_id: 100,
            reaction: reaction.to_string(),
            title: "Great day".to_string(),
            content: "so happy".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_model_to_entity() {
        let entry = entry_from_model(model("LIKE")).unwrap();
        assert_eq!(entry.reaction, Reaction::Like);
        assert_eq!(entry.blog_id, Snowflake::new(100));
    }

    #[test]
    fn test_unknown_reaction_is_database_error() {
        let err = entry_from_model(model("MEH")).unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
