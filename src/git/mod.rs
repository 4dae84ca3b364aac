use indexmap::IndexMap;
use std::path::Path;

pub mod history;

pub use history::HistoryReader;

/// Directory -> number of staged files under it, in first-seen order.
pub type StagedCounts = IndexMap<String, usize>;

/// Parent directory of a path, or `None` for root-level files.
pub(crate) fn parent_dir(path: &str) -> Option<String> {
    let parent = Path::new(path.trim()).parent()?;
    let parent = parent.to_string_lossy();
    if parent.is_empty() {
        None
    } else {
        Some(parent.into_owned())
    }
}
