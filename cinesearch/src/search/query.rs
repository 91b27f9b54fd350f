use crate::utils::any::Any;
use derive_more::Display;
use unicode_segmentation::UnicodeSegmentation;

/// A trimmed query long enough to be sent to the search endpoint.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Returns `None` when the trimmed input has fewer than `min_len` graphemes.
    pub fn parse(raw: &str, min_len: usize) -> Option<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.graphemes(true).count() < min_len {
            return trimmed.none();
        }

        Self(trimmed.to_owned()).some()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_or_blank_queries_are_rejected() {
        assert_eq!(SearchQuery::parse("", 2), None);
        assert_eq!(SearchQuery::parse("   ", 2), None);
        assert_eq!(SearchQuery::parse(" a ", 2), None);
        assert_eq!(SearchQuery::parse("ă", 2), None);
    }

    #[test]
    fn queries_are_trimmed() {
        let query = SearchQuery::parse("  người nhện \t", 2).unwrap();

        assert_eq!(query.as_str(), "người nhện");
        assert_eq!(query.to_string(), "người nhện");
    }

    #[test]
    fn length_counts_graphemes() {
        // NOTE: "e" followed by a combining acute accent is one grapheme
        assert_eq!(SearchQuery::parse("e\u{301}", 2), None);
        assert!(SearchQuery::parse("e\u{301}t", 2).is_some());
    }
}
