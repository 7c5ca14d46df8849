//! Post model

use serde::{Deserialize, Serialize};

/// A blog post as served by the JSON API
///
/// Derived from a single markdown file on every ingestion pass; never
/// mutated after construction. `id` and `slug` are both the filename with
/// its extension stripped, verbatim (filenames are public identifiers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Filename minus extension
    pub id: String,

    /// Post title, or the configured placeholder
    pub title: String,

    /// Raw front-matter date string, if any
    pub date: Option<String>,

    /// Post author, or the configured placeholder
    pub author: String,

    /// Post tags in front-matter order
    pub tags: Vec<String>,

    /// Same filename transform as `id`
    pub slug: String,

    /// Front-matter excerpt, or the leading body characters with an ellipsis
    pub excerpt: String,

    /// Full markdown body (front-matter stripped)
    pub content: String,

    /// Estimated reading time in whole minutes
    pub reading_time: u32,

    /// URL of the first markdown image in the body, if any
    pub first_image: Option<String>,
}

impl Post {
    /// Whether the post's tag sequence contains `tag` exactly
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Post {
        Post {
            id: "first-post".to_string(),
            title: "First Post".to_string(),
            date: Some("2024-01-15".to_string()),
            author: "hua".to_string(),
            tags: vec!["rust".to_string(), "notes".to_string()],
            slug: "first-post".to_string(),
            excerpt: "intro...".to_string(),
            content: "intro".to_string(),
            reading_time: 1,
            first_image: None,
        }
    }

    #[test]
    fn test_has_tag_is_exact() {
        let post = sample();
        assert!(post.has_tag("rust"));
        assert!(!post.has_tag("Rust"));
        assert!(!post.has_tag("rus"));
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["readingTime"], 1);
        assert!(value["firstImage"].is_null());
        assert_eq!(value["id"], value["slug"]);
        assert_eq!(value["date"], "2024-01-15");
    }
}
