//! Mood validator - accepts or rejects an entry against its blog's polarity

use crate::entities::{Polarity, Reaction};
use crate::error::DomainError;

use super::markers::{contains_marker, disqualifying_markers};

/// Validate an entry's mood consistency against its parent blog's polarity
///
/// Two checks, fail-fast and mutually exclusive per call:
///
/// 1. The reaction tag must be polarity-compatible with the blog. A mismatch
///    fails with [`DomainError::InvalidEmoji`] and content is never examined.
/// 2. Neither title nor content may contain a marker word of the opposite
///    polarity; a hit fails with [`DomainError::InvalidContent`].
///
/// Pure and deterministic: no I/O, no side effects. Re-validating an accepted
/// entry with unchanged fields always accepts.
pub fn validate_entry(
    blog_polarity: Polarity,
    reaction: Reaction,
    title: &str,
    content: &str,
) -> Result<(), DomainError> {
    if !reaction.is_compatible_with(blog_polarity) {
        return Err(DomainError::InvalidEmoji);
    }

    let markers = disqualifying_markers(blog_polarity);
    if contains_marker(title, markers) || contains_marker(content, markers) {
        return Err(DomainError::InvalidContent);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid_emoji(polarity: Polarity, reaction: Reaction) {
        assert!(matches!(
            validate_entry(polarity, reaction, "ok", "fine"),
            Err(DomainError::InvalidEmoji)
        ));
    }

    #[test]
    fn test_negative_reactions_rejected_on_positive_blog() {
        assert_invalid_emoji(Polarity::Positive, Reaction::Sad);
        assert_invalid_emoji(Polarity::Positive, Reaction::Angry);
    }

    #[test]
    fn test_positive_reactions_rejected_on_negative_blog() {
        assert_invalid_emoji(Polarity::Negative, Reaction::Like);
        assert_invalid_emoji(Polarity::Negative, Reaction::Haha);
    }

    #[test]
    fn test_compatible_entry_accepted() {
        assert!(validate_entry(Polarity::Positive, Reaction::Like, "Great day", "so happy").is_ok());
        assert!(validate_entry(Polarity::Negative, Reaction::Angry, "Bad day", "everything broke").is_ok());
    }

    #[test]
    fn test_negative_marker_in_title_rejected_on_positive_blog() {
        assert!(matches!(
            validate_entry(Polarity::Positive, Reaction::Like, "I feel lonely", "fine"),
            Err(DomainError::InvalidContent)
        ));
    }

    #[test]
    fn test_negative_marker_in_content_rejected_on_positive_blog() {
        for marker in ["sad", "fear", "lonely"] {
            assert!(matches!(
                validate_entry(Polarity::Positive, Reaction::Haha, "ok", marker),
                Err(DomainError::InvalidContent)
            ));
        }
    }

    #[test]
    fn test_positive_marker_rejected_on_negative_blog() {
        // "trust" in content disqualifies even though the title is fine
        assert!(matches!(
            validate_entry(Polarity::Negative, Reaction::Angry, "I hate this", "trust no one"),
            Err(DomainError::InvalidContent)
        ));
        for marker in ["love", "happy", "trust"] {
            assert!(matches!(
                validate_entry(Polarity::Negative, Reaction::Sad, marker, "meh"),
                Err(DomainError::InvalidContent)
            ));
        }
    }

    #[test]
    fn test_marker_matching_is_case_insensitive() {
        assert!(matches!(
            validate_entry(Polarity::Positive, Reaction::Like, "SO SAD", "fine"),
            Err(DomainError::InvalidContent)
        ));
    }

    #[test]
    fn test_reaction_check_short_circuits_content_check() {
        // Both violations present; the emoji check wins
        assert!(matches!(
            validate_entry(Polarity::Positive, Reaction::Sad, "so sad", "lonely"),
            Err(DomainError::InvalidEmoji)
        ));
    }

    #[test]
    fn test_validation_is_idempotent() {
        for _ in 0..3 {
            assert!(validate_entry(Polarity::Positive, Reaction::Like, "Great day", "so happy").is_ok());
        }
    }
}
