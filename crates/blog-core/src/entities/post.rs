//! Post entity - a tagged blog post with derived counters

use chrono::{DateTime, Utc};

use crate::entities::Tag;

/// Post entity
///
/// Counters are owned by the storage layer: `likes_count` changes only through
/// the atomic increment operation, and `comments_count` must equal the number
/// of live comments for this post. `tags` is the current association set,
/// hydrated separately from the post row itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub likes_count: i32,
    pub comments_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<Tag>,
}

impl Post {
    /// Names of all tags currently associated with this post
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.name.clone()).collect()
    }

    /// Check if the post carries a tag with the given (canonical) name
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name == name)
    }

    /// Get a char-boundary-safe preview of the post body
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.text.char_indices();
        match chars.nth(max_chars) {
            None => self.text.clone(),
            Some((idx, _)) => {
                let mut preview = self.text[..idx].to_string();
                preview.push('\u{2026}');
                preview
            }
        }
    }

    /// Check if the post body is blank
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(text: &str, tags: Vec<Tag>) -> Post {
        Post {
            id: 1,
            title: "Title".to_string(),
            text: text.to_string(),
            likes_count: 0,
            comments_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            tags,
        }
    }

    #[test]
    fn test_preview_short_body_unchanged() {
        let post = sample_post("short body", vec![]);
        assert_eq!(post.preview(128), "short body");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        let post = sample_post(&"x".repeat(200), vec![]);
        let preview = post.preview(128);
        assert_eq!(preview.chars().count(), 129);
        assert!(preview.ends_with('\u{2026}'));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let post = sample_post(&"я".repeat(130), vec![]);
        let preview = post.preview(128);
        assert_eq!(preview.chars().count(), 129);
        assert!(preview.ends_with('\u{2026}'));
    }

    #[test]
    fn test_has_tag() {
        let post = sample_post(
            "body",
            vec![Tag {
                id: 1,
                name: "java".to_string(),
            }],
        );
        assert!(post.has_tag("java"));
        assert!(!post.has_tag("rust"));
    }
}
