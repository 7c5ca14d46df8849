//! Archive tree - year/month chronological grouping

use chrono::Datelike;
use indexmap::IndexMap;
use serde::Serialize;

use crate::content::Post;
use crate::helpers::{month_name, month_number, parse_date};

/// Posts grouped under one year
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearEntry {
    /// Count of dated posts in this year
    pub total_posts: usize,
    /// Full month name -> posts, iteration order December through January
    pub months: IndexMap<String, Vec<Post>>,
}

/// Year -> month -> posts grouping for chronological navigation
///
/// Posts whose `date` is absent or unparseable are omitted here; they
/// still appear in the main listing. Iteration order is years descending,
/// then months in calendar-descending order regardless of per-month
/// counts. Rebuilt from scratch whenever the post array changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ArchiveTree {
    years: IndexMap<i32, YearEntry>,
}

impl ArchiveTree {
    /// Build the tree from a post array
    pub fn build(posts: &[Post]) -> Self {
        let mut years: IndexMap<i32, YearEntry> = IndexMap::new();

        for post in posts {
            let Some(date) = post.date.as_deref().and_then(parse_date) else {
                continue;
            };

            let entry = years.entry(date.year()).or_default();
            entry
                .months
                .entry(month_name(&date).to_string())
                .or_default()
                .push(post.clone());
            entry.total_posts += 1;
        }

        // Years newest first, months December through January
        years.sort_by(|y1, _, y2, _| y2.cmp(y1));
        for entry in years.values_mut() {
            entry.months.sort_by(|m1, _, m2, _| {
                month_number(m2)
                    .unwrap_or(0)
                    .cmp(&month_number(m1).unwrap_or(0))
            });
        }

        Self { years }
    }

    /// Years in iteration order (newest first)
    pub fn years(&self) -> impl Iterator<Item = (i32, &YearEntry)> {
        self.years.iter().map(|(year, entry)| (*year, entry))
    }

    /// Entry for one year, if any dated post falls in it
    pub fn year(&self, year: i32) -> Option<&YearEntry> {
        self.years.get(&year)
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
