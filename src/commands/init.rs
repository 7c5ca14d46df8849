//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("posts"))?;
    fs::create_dir_all(target_dir.join("public/images"))?;

    // Create default _config.yml
    let config_content = r#"# inkpost configuration

# Site
title: Blog
author: Anonymous

# Directory
posts_dir: posts
public_dir: public

# Post defaults
default_title: Untitled
excerpt_length: 150
words_per_minute: 200

# Server
server:
  ip: localhost
  port: 4000
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    // Create a sample post
    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
tags:
  - meta
---

Welcome to your new blog. This post lives in `posts/hello-world.md`;
edit it, or drop more markdown files next to it, and they show up under
`/api/posts` on the next request.

Put images under `public/images` and reference them like this:

![a first image](/images/hello.png)
"#,
        now.format("%Y-%m-%d")
    );

    fs::write(target_dir.join("posts/hello-world.md"), sample_post)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blog;

    #[test]
    fn test_init_creates_skeleton() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").exists());
        assert!(dir.path().join("posts/hello-world.md").exists());
        assert!(dir.path().join("public/images").is_dir());

        // The generated config must load back
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.config.server.port, 4000);
        assert_eq!(blog.posts_dir, dir.path().join("posts"));
    }
}
