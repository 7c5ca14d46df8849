//! UI state as a single object with explicit transitions
//!
//! The client tracks several interdependent slices of state: the post
//! array, the tag palette, the archive tree, the current selections, and
//! the sidebar expansion flags. They live in one struct and change only
//! through [`SiteState::apply`], so the derived indices can never drift
//! out of sync with the post list. Nothing here is persisted; a reload
//! starts from [`SiteState::new`].

use std::collections::HashMap;

use crate::content::Post;

use super::archive::ArchiveTree;
use super::tags::{collect_tags, filter_by_tag, ALL_TAG};

/// State transitions driven by data arrival and user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A fresh post array arrived; rebuild every derived index
    PostsLoaded(Vec<Post>),
    /// Filter the visible list by a tag (`"ALL"` clears the filter)
    SelectTag(String),
    /// Open a single post by id
    SelectPost(String),
    /// Return from the single-post view to the list
    ClearSelection,
    /// Expand or collapse a year in the archive sidebar
    ToggleYear(i32),
    /// Expand or collapse a (year, month) pair
    ToggleMonth(i32, String),
}

/// The whole of the client-side state
#[derive(Debug, Clone)]
pub struct SiteState {
    posts: Vec<Post>,
    tags: Vec<String>,
    archive: ArchiveTree,
    selected_tag: String,
    selected_post: Option<String>,
    expanded_years: HashMap<i32, bool>,
    expanded_months: HashMap<(i32, String), bool>,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            tags: Vec::new(),
            archive: ArchiveTree::default(),
            selected_tag: ALL_TAG.to_string(),
            selected_post: None,
            expanded_years: HashMap::new(),
            expanded_months: HashMap::new(),
        }
    }
}

impl SiteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one transition
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::PostsLoaded(posts) => {
                self.tags = collect_tags(&posts);
                self.archive = ArchiveTree::build(&posts);
                self.posts = posts;
                self.selected_tag = ALL_TAG.to_string();
                self.selected_post = None;
                self.expanded_years.clear();
                self.expanded_months.clear();
            }
            Action::SelectTag(tag) => {
                self.selected_tag = tag;
                // Picking from the palette always returns to the list view
                self.selected_post = None;
            }
            Action::SelectPost(id) => {
                if self.posts.iter().any(|p| p.id == id) {
                    self.selected_post = Some(id);
                }
            }
            Action::ClearSelection => {
                self.selected_post = None;
            }
            Action::ToggleYear(year) => {
                let expanded = self.expanded_years.entry(year).or_insert(false);
                *expanded = !*expanded;
            }
            Action::ToggleMonth(year, month) => {
                let expanded = self.expanded_months.entry((year, month)).or_insert(false);
                *expanded = !*expanded;
            }
        }
    }

    /// Posts visible under the current tag filter
    pub fn visible_posts(&self) -> Vec<&Post> {
        filter_by_tag(&self.posts, &self.selected_tag)
    }

    /// Palette entries: `"ALL"` followed by every distinct tag
    pub fn tag_palette(&self) -> Vec<&str> {
        std::iter::once(ALL_TAG)
            .chain(self.tags.iter().map(String::as_str))
            .collect()
    }

    /// The post currently open in the single-post view, if any
    pub fn selected_post(&self) -> Option<&Post> {
        self.selected_post
            .as_deref()
            .and_then(|id| self.posts.iter().find(|p| p.id == id))
    }

    pub fn selected_tag(&self) -> &str {
        &self.selected_tag
    }

    pub fn archive(&self) -> &ArchiveTree {
        &self.archive
    }

    pub fn is_year_expanded(&self, year: i32) -> bool {
        self.expanded_years.get(&year).copied().unwrap_or(false)
    }

    pub fn is_month_expanded(&self, year: i32, month: &str) -> bool {
        self.expanded_months
            .get(&(year, month.to_string()))
            .copied()
            .unwrap_or(false)
    }
}
