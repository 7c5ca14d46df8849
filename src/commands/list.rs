//! List site content

use anyhow::Result;

use crate::content::PostLoader;
use crate::helpers::{full_date, parse_date, plain_excerpt};
use crate::Blog;

/// List site content by type
pub async fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let loader = PostLoader::new(blog);

    match content_type {
        "post" | "posts" => {
            let mut posts = loader.load_posts().await?;
            // Dated posts first, newest on top; undated sort last
            posts.sort_by(|a, b| b.date.cmp(&a.date));

            println!("Posts ({}):", posts.len());
            for post in posts {
                let date = post
                    .date
                    .as_deref()
                    .and_then(parse_date)
                    .map(|d| full_date(&d))
                    .unwrap_or_else(|| "No date".to_string());
                println!(
                    "  {} - {} ({} min read) [{}]",
                    date, post.title, post.reading_time, post.id
                );
                let preview = plain_excerpt(&post.content, 80);
                if !preview.is_empty() {
                    println!("      {}", preview);
                }
            }
        }
        "tag" | "tags" => {
            let posts = loader.load_posts().await?;
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }

            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown content type: {}. Use: post, tag",
                content_type
            );
        }
    }

    Ok(())
}
