//! Presentation/aggregation layer
//!
//! Implements the client's contract over the post array: the deduplicated
//! tag palette, the year/month archive tree, tag filtering, and the UI
//! state machine that ties them together.

mod archive;
mod state;
mod tags;

pub use archive::{ArchiveTree, YearEntry};
pub use state::{Action, SiteState};
pub use tags::{collect_tags, filter_by_tag, ALL_TAG};
