//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Blog not found: {0}")]
    BlogNotFound(Snowflake),

    #[error("Entry not found: {0}")]
    EntryNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Client supplied an id on create
    #[error("A new entity cannot already have an ID")]
    IdExists,

    /// Client omitted the id on update
    #[error("Invalid id")]
    IdMissing,

    /// Entry reaction contradicts the blog's declared polarity
    #[error("Invalid Emoji")]
    InvalidEmoji,

    /// Entry title or content contains a marker word of the opposite polarity
    #[error("Invalid Content")]
    InvalidContent,

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get the stable error code string surfaced to API clients
    ///
    /// The four validation codes are part of the wire contract and must not
    /// change: `idexists`, `idnull`, `invalidEmoji`, `invalidContent`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BlogNotFound(_) => "blogNotFound",
            Self::EntryNotFound(_) => "entryNotFound",
            Self::IdExists => "idexists",
            Self::IdMissing => "idnull",
            Self::InvalidEmoji => "invalidEmoji",
            Self::InvalidContent => "invalidContent",
            Self::ValidationError(_) => "validationError",
            Self::DatabaseError(_) => "databaseError",
            Self::InternalError(_) => "internalError",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BlogNotFound(_) | Self::EntryNotFound(_))
    }

    /// Check if this is a client-input validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::IdExists
                | Self::IdMissing
                | Self::InvalidEmoji
                | Self::InvalidContent
                | Self::ValidationError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_contract_codes() {
        assert_eq!(DomainError::IdExists.code(), "idexists");
        assert_eq!(DomainError::IdMissing.code(), "idnull");
        assert_eq!(DomainError::InvalidEmoji.code(), "invalidEmoji");
        assert_eq!(DomainError::InvalidContent.code(), "invalidContent");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::BlogNotFound(Snowflake::new(1)).is_not_found());
        assert!(DomainError::EntryNotFound(Snowflake::new(1)).is_not_found());
        assert!(!DomainError::InvalidEmoji.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::IdExists.is_validation());
        assert!(DomainError::InvalidContent.is_validation());
        assert!(!DomainError::EntryNotFound(Snowflake::new(1)).is_validation());
        assert!(!DomainError::DatabaseError("oops".to_string()).is_validation());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::InvalidEmoji.to_string(), "Invalid Emoji");
        assert_eq!(
            DomainError::EntryNotFound(Snowflake::new(7)).to_string(),
            "Entry not found: 7"
        );
    }
}
