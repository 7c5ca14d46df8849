//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
///
/// Every field carries an explicit fallback, so a bare posts directory
/// works with no `_config.yml` at all and a partial file only overrides
/// what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    /// Byline used for posts whose front-matter has no `author`
    pub author: String,

    // Directory
    pub posts_dir: String,
    pub public_dir: String,

    // Post defaults
    /// Title used for posts whose front-matter has no `title`
    pub default_title: String,
    /// Characters of body content used for the fallback excerpt
    pub excerpt_length: usize,
    /// Reading-rate divisor for the reading-time estimate
    pub words_per_minute: usize,

    // Server
    #[serde(default)]
    pub server: ServerConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: "Anonymous".to_string(),

            posts_dir: "posts".to_string(),
            public_dir: "public".to_string(),

            default_title: "Untitled".to_string(),
            excerpt_length: 150,
            words_per_minute: 200,

            server: ServerConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Server bind configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}
