//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Scaffold a markdown post with front-matter
///
/// The slugified filename becomes the post's public id verbatim, so the
/// slug is fixed at creation time and never derived again.
pub fn create_post(blog: &Blog, title: &str) -> Result<()> {
    let now = chrono::Local::now();

    fs::create_dir_all(&blog.posts_dir)?;

    let filename = format!("{}.md", slug::slugify(title));
    let file_path = blog.posts_dir.join(&filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: {}
date: {}
author: {}
tags: []
---

"#,
        title,
        now.format("%Y-%m-%d"),
        blog.config.author
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_scaffolds_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        create_post(&blog, "My First Post").unwrap();

        let path = dir.path().join("posts/my-first-post.md");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("---\n"));
        assert!(content.contains("title: My First Post"));
        assert!(content.contains("author: Anonymous"));
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();

        create_post(&blog, "Same Title").unwrap();
        assert!(create_post(&blog, "Same Title").is_err());
    }
}
