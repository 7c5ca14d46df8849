//! Post loader - reads markdown posts from the posts directory

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::task::JoinSet;

use super::{FrontMatter, Post};
use crate::config::SiteConfig;
use crate::helpers::{fallback_excerpt, first_image, reading_time};
use crate::Blog;

/// Loads posts from the posts directory
pub struct PostLoader {
    posts_dir: PathBuf,
    config: SiteConfig,
}

impl PostLoader {
    /// Create a new post loader
    pub fn new(blog: &Blog) -> Self {
        Self {
            posts_dir: blog.posts_dir.clone(),
            config: blog.config.clone(),
        }
    }

    /// Load every markdown post in the directory
    ///
    /// Files are read and parsed concurrently; result order follows task
    /// completion and is unspecified. A missing or unreadable directory
    /// fails the whole call. A single file that cannot be read is skipped
    /// with a warning and the rest of the batch is returned.
    pub async fn load_posts(&self) -> Result<Vec<Post>> {
        let mut entries = tokio::fs::read_dir(&self.posts_dir)
            .await
            .with_context(|| format!("reading posts directory {:?}", self.posts_dir))?;

        let mut tasks = JoinSet::new();

        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("reading posts directory {:?}", self.posts_dir))?
        {
            let path = entry.path();
            if !entry.file_type().await?.is_file() || !is_markdown_file(&path) {
                tracing::debug!("Skipping non-post entry {:?}", path);
                continue;
            }

            let config = self.config.clone();
            tasks.spawn(async move {
                let post = load_post(&path, &config).await;
                (post, path)
            });
        }

        let mut posts = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            let (result, path) = joined?;
            match result {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        Ok(posts)
    }
}

/// Load a single post from a file
async fn load_post(path: &Path, config: &SiteConfig) -> Result<Post> {
    let raw = tokio::fs::read_to_string(path).await?;
    let (fm, body) = FrontMatter::parse(&raw);

    // Filename minus extension becomes the public identifier, verbatim
    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled")
        .to_string();

    let title = fm.title.unwrap_or_else(|| config.default_title.clone());
    let author = fm.author.unwrap_or_else(|| config.author.clone());
    let excerpt = fm
        .excerpt
        .unwrap_or_else(|| fallback_excerpt(body, config.excerpt_length));

    Ok(Post {
        slug: id.clone(),
        id,
        title,
        date: fm.date,
        author,
        tags: fm.tags,
        excerpt,
        reading_time: reading_time(body, config.words_per_minute),
        first_image: first_image(body).map(str::to_string),
        content: body.to_string(),
    })
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}
