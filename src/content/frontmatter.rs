//! Front-matter parsing

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Front-matter data from a post file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    /// Raw date string; parsed only where a calendar date is needed
    pub date: Option<String>,
    pub author: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    pub excerpt: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    ///
    /// Splits a leading YAML block delimited by `---` fences from the
    /// markdown body. Absent or malformed front-matter is never an error:
    /// the whole content becomes the body and every field falls back to
    /// its default.
    pub fn parse(content: &str) -> (Self, &str) {
        let trimmed = content.trim_start();

        if !trimmed.starts_with("---") {
            return (FrontMatter::default(), content);
        }

        let rest = &trimmed[3..]; // Skip opening ---
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing fence, treat as no front-matter
            return (FrontMatter::default(), content);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = &rest[end_pos + 4..]; // Skip \n---
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => (fm, remaining),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }
}
