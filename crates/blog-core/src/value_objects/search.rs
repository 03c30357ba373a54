//! Search query parsing and tag canonicalization
//!
//! A raw search string is tokenized on whitespace runs. A token starting with
//! `#` followed by at least one character is a tag filter; everything else
//! joins the case-insensitive title filter. Tag names pass through the same
//! normalization whether they come from a search string or from a create or
//! update request, which is what makes the case-insensitive unique constraint
//! on `tag.name` enforceable at the storage layer.

use std::collections::BTreeSet;

use crate::error::DomainError;

/// Reserved prefix marking a token as a tag filter
pub const TAG_PREFIX: char = '#';

/// Canonicalize a raw tag name: trim surrounding whitespace and lowercase.
///
/// Returns [`DomainError::InvalidTag`] when the trimmed value is empty.
pub fn normalize_tag(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidTag(raw.to_string()));
    }
    Ok(trimmed.to_lowercase())
}

/// Parsed search input: a set of canonical tag filters plus a lowercased
/// title substring filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Tag filters with AND semantics - a post must carry every one of them.
    /// A set, so duplicate tokens collapse and order is irrelevant.
    pub tags: BTreeSet<String>,
    /// Lowercased free-text tokens rejoined with single spaces, in original
    /// order. Empty matches every title.
    pub title: String,
}

impl SearchQuery {
    /// Parse a raw search string.
    ///
    /// Never fails: tokens produced by whitespace splitting are non-empty,
    /// and a tag token is only recognized when a non-empty remainder follows
    /// the prefix, so normalization cannot reject it. A token that is exactly
    /// the prefix character is treated as a literal title word.
    pub fn parse(raw: &str) -> Self {
        let mut tags = BTreeSet::new();
        let mut title_words: Vec<String> = Vec::new();

        for token in raw.split_whitespace() {
            match token.strip_prefix(TAG_PREFIX) {
                Some(rest) if !rest.is_empty() => {
                    tags.insert(rest.to_lowercase());
                }
                _ => title_words.push(token.to_lowercase()),
            }
        }

        Self {
            tags,
            title: title_words.join(" "),
        }
    }

    /// Check if the query matches everything
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.title.is_empty()
    }

    /// Tag filters as a vector, for `ANY($n)` binding
    pub fn tag_vec(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_tag("  Java ").unwrap(), "java");
        assert_eq!(normalize_tag("RUST").unwrap(), "rust");
    }

    #[test]
    fn test_normalize_rejects_blank() {
        assert!(matches!(
            normalize_tag("   "),
            Err(DomainError::InvalidTag(_))
        ));
        assert!(matches!(normalize_tag(""), Err(DomainError::InvalidTag(_))));
    }

    #[test]
    fn test_parse_mixed_tokens() {
        let query = SearchQuery::parse("boot #Java tips");
        assert_eq!(query.tags, BTreeSet::from(["java".to_string()]));
        assert_eq!(query.title, "boot tips");
    }

    #[test]
    fn test_parse_duplicate_tags_collapse() {
        let query = SearchQuery::parse("#java #JAVA #Java");
        assert_eq!(query.tags.len(), 1);
        assert!(query.tags.contains("java"));
        assert!(query.title.is_empty());
    }

    #[test]
    fn test_parse_bare_prefix_is_title_word() {
        let query = SearchQuery::parse("# hello");
        assert!(query.tags.is_empty());
        assert_eq!(query.title, "# hello");
    }

    #[test]
    fn test_parse_blank_input_matches_everything() {
        let query = SearchQuery::parse("   \t  ");
        assert!(query.is_empty());

        let query = SearchQuery::parse("");
        assert!(query.is_empty());
    }

    #[test]
    fn test_parse_title_preserves_order_and_collapses_whitespace() {
        let query = SearchQuery::parse("  Spring   BOOT  guide ");
        assert_eq!(query.title, "spring boot guide");
    }
}
