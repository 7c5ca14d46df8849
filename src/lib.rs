//! inkpost: a personal markdown blog server
//!
//! This crate reads markdown posts with YAML front-matter from a flat
//! directory, derives the fields the client renders (reading time, excerpt,
//! first image), and serves the result as a JSON array over HTTP. The
//! `site` module implements the client-side contract: tag palette, archive
//! tree, and the UI state machine.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod site;

use anyhow::Result;
use std::path::Path;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory of markdown posts
    pub posts_dir: std::path::PathBuf,
    /// Static assets served at the web root
    pub public_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            public_dir,
        })
    }
}
