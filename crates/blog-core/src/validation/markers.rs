//! Keyword policy - fixed marker-word sets for content screening
//!
//! Marker words signal a polarity. A positive blog must not carry entries
//! whose text contains a negative marker, and vice versa. The sets are
//! process-wide constants, matched case-insensitively by substring.

use crate::entities::Polarity;

/// Words that signal negative sentiment
pub const NEGATIVE_MARKERS: &[&str] = &["sad", "fear", "lonely"];

/// Words that signal positive sentiment
pub const POSITIVE_MARKERS: &[&str] = &["love", "happy", "trust"];

/// The marker words that signal the given polarity
pub fn markers_signaling(polarity: Polarity) -> &'static [&'static str] {
    match polarity {
        Polarity::Positive => POSITIVE_MARKERS,
        Polarity::Negative => NEGATIVE_MARKERS,
    }
}

/// The marker set that disqualifies content on a blog of the given polarity
///
/// A positive blog is screened against negative markers and vice versa.
pub fn disqualifying_markers(blog_polarity: Polarity) -> &'static [&'static str] {
    markers_signaling(blog_polarity.opposite())
}

/// Check whether `text` contains any of the given marker words
///
/// The field is lower-cased as a whole before matching, so markers hit both
/// standalone words and substrings ("TRUSTWORTHY" contains "trust").
pub fn contains_marker(text: &str, markers: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    markers.iter().any(|marker| lowered.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        assert!(contains_marker("So SAD today", NEGATIVE_MARKERS));
        assert!(contains_marker("LOVE it", POSITIVE_MARKERS));
    }

    #[test]
    fn test_substring_match() {
        assert!(contains_marker("I feel lonely", NEGATIVE_MARKERS));
        assert!(contains_marker("trust no one", POSITIVE_MARKERS));
        assert!(contains_marker("trustworthy", POSITIVE_MARKERS));
    }

    #[test]
    fn test_clean_text() {
        assert!(!contains_marker("a perfectly neutral sentence", NEGATIVE_MARKERS));
        assert!(!contains_marker("a perfectly neutral sentence", POSITIVE_MARKERS));
    }

    #[test]
    fn test_markers_signaling() {
        assert_eq!(markers_signaling(Polarity::Positive), POSITIVE_MARKERS);
        assert_eq!(markers_signaling(Polarity::Negative), NEGATIVE_MARKERS);
    }

    #[test]
    fn test_disqualifying_markers() {
        assert_eq!(disqualifying_markers(Polarity::Positive), NEGATIVE_MARKERS);
        assert_eq!(disqualifying_markers(Polarity::Negative), POSITIVE_MARKERS);
    }
}
