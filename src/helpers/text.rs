//! Text derivation helpers for post records

use lazy_static::lazy_static;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use regex::Regex;

lazy_static! {
    /// First markdown image reference: `![alt](url)`
    static ref IMAGE_RE: Regex = Regex::new(r"!\[.*?\]\((.*?)\)").unwrap();
}

/// Estimated reading time in whole minutes
///
/// Counts whitespace-separated tokens and divides by the reading rate,
/// rounding up. Never less than one minute, even for an empty body.
pub fn reading_time(body: &str, words_per_minute: usize) -> u32 {
    let words = body.split_whitespace().count();
    words.div_ceil(words_per_minute.max(1)).max(1) as u32
}

/// URL of the first markdown image reference in the body, if any
///
/// A single linear scan for `![alt](url)` syntax; later occurrences and
/// embedded HTML `<img>` tags are not considered.
pub fn first_image(body: &str) -> Option<&str> {
    IMAGE_RE
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Fallback excerpt: the leading characters of the raw body plus an ellipsis
pub fn fallback_excerpt(body: &str, max_chars: usize) -> String {
    let cut: String = body.chars().take(max_chars).collect();
    format!("{}...", cut)
}

/// Plain-text preview of a markdown body
///
/// Walks the markdown event stream keeping text and inline code, dropping
/// image references (including their alt text) and all formatting markers,
/// then truncates to `max_chars`.
pub fn plain_excerpt(markdown: &str, max_chars: usize) -> String {
    let mut text = String::new();
    let mut image_depth: usize = 0;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::End(TagEnd::Image) => image_depth = image_depth.saturating_sub(1),
            Event::Text(t) | Event::Code(t) if image_depth == 0 => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if image_depth == 0 => text.push(' '),
            // Block boundaries become single spaces
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => {
                if !text.ends_with(' ') {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }

    let text = text.trim();
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_time_boundaries() {
        let two_hundred = "word ".repeat(200);
        let two_hundred_one = "word ".repeat(201);
        assert_eq!(reading_time(&two_hundred, 200), 1);
        assert_eq!(reading_time(&two_hundred_one, 200), 2);
    }

    #[test]
    fn test_reading_time_floors_at_one() {
        assert_eq!(reading_time("", 200), 1);
        assert_eq!(reading_time("   \n\t  ", 200), 1);
        assert_eq!(reading_time("just a few words", 200), 1);
    }

    #[test]
    fn test_reading_time_is_monotone() {
        let mut last = 0;
        for n in [0, 1, 199, 200, 201, 400, 401, 1000] {
            let body = "w ".repeat(n);
            let minutes = reading_time(&body, 200);
            assert!(minutes >= last, "not monotone at {} words", n);
            last = minutes;
        }
    }

    #[test]
    fn test_first_image_takes_first_occurrence() {
        let body = "intro\n\n![one](/images/one.png)\n\n![two](/images/two.png)\n";
        assert_eq!(first_image(body), Some("/images/one.png"));
    }

    #[test]
    fn test_first_image_none_without_match() {
        assert_eq!(first_image("no images here, just <img> talk"), None);
    }

    #[test]
    fn test_first_image_external_url() {
        let body = "![alt text](https://example.com/pic.jpg) trailing";
        assert_eq!(first_image(body), Some("https://example.com/pic.jpg"));
    }

    #[test]
    fn test_fallback_excerpt_truncates_and_appends() {
        let body = "a".repeat(300);
        let excerpt = fallback_excerpt(&body, 150);
        assert_eq!(excerpt.len(), 153);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_fallback_excerpt_short_body() {
        assert_eq!(fallback_excerpt("short", 150), "short...");
    }

    #[test]
    fn test_fallback_excerpt_respects_char_boundaries() {
        let body = "日本語のテキストです。".repeat(30);
        let excerpt = fallback_excerpt(&body, 150);
        assert_eq!(excerpt.chars().count(), 153);
    }

    #[test]
    fn test_plain_excerpt_strips_markup_and_images() {
        let md = "# Heading\n\nSome *emphasis* and `code`.\n\n![a picture](/img.png)\n";
        let text = plain_excerpt(md, 100);
        assert_eq!(text, "Heading Some emphasis and code.");
    }

    #[test]
    fn test_plain_excerpt_truncates() {
        let md = "plain ".repeat(100);
        let text = plain_excerpt(&md, 20);
        assert!(text.ends_with("..."));
        assert_eq!(text.chars().count(), 23);
    }
}
