//! Tag aggregation and filtering

use std::collections::HashSet;

use crate::content::Post;

/// Synthetic palette entry that selects every post
pub const ALL_TAG: &str = "ALL";

/// Deduplicated tags across all posts
///
/// Flattens every post's tag sequence and drops duplicates by value
/// equality. Order follows first appearance; the palette is rendered as
/// an unordered set with [`ALL_TAG`] prepended by the caller.
pub fn collect_tags(posts: &[Post]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for post in posts {
        for tag in &post.tags {
            if seen.insert(tag.clone()) {
                tags.push(tag.clone());
            }
        }
    }

    tags
}

/// Posts visible under a tag selection
///
/// [`ALL_TAG`] selects everything; any other value selects exactly the
/// posts whose tag sequence contains it (case-sensitive, no partial
/// matching).
pub fn filter_by_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    if tag == ALL_TAG {
        return posts.iter().collect();
    }

    posts.iter().filter(|p| p.has_tag(tag)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, tags: &[&str]) -> Post {
        Post {
            id: id.to_string(),
            title: id.to_string(),
            date: None,
            author: "Anonymous".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            slug: id.to_string(),
            excerpt: String::new(),
            content: String::new(),
            reading_time: 1,
            first_image: None,
        }
    }

    #[test]
    fn test_collect_tags_deduplicates() {
        let posts = vec![
            post("a", &["rust", "notes"]),
            post("b", &["notes", "life"]),
            post("c", &[]),
        ];

        let tags = collect_tags(&posts);
        assert_eq!(tags, vec!["rust", "notes", "life"]);
    }

    #[test]
    fn test_collect_tags_is_case_sensitive() {
        let posts = vec![post("a", &["Rust"]), post("b", &["rust"])];
        let tags = collect_tags(&posts);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let posts = vec![post("a", &["rust"]), post("b", &[])];
        let visible = filter_by_tag(&posts, ALL_TAG);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_filter_by_literal_tag() {
        let posts = vec![
            post("a", &["rust", "notes"]),
            post("b", &["notes"]),
            post("c", &["life"]),
        ];

        let visible = filter_by_tag(&posts, "notes");
        let ids: Vec<_> = visible.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        // No partial matching
        assert!(filter_by_tag(&posts, "note").is_empty());
    }
}
