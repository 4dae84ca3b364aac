use super::{round2, AttributionTable};
use indexmap::IndexMap;
use std::path::Path;

/// Folder -> ranked (prefix, percentage) pairs, in query order.
pub type Recommendations = IndexMap<String, Vec<(String, f64)>>;

/// Prefixes in lexicographic order, each with its directories sorted by
/// descending percentage. The sort is stable, so equal percentages keep
/// their first-touch order.
pub fn list_all(table: &AttributionTable) -> Vec<(String, Vec<(String, f64)>)> {
    let mut prefixes: Vec<&String> = table.prefix_dirs.keys().collect();
    prefixes.sort();

    prefixes
        .into_iter()
        .map(|prefix| {
            let mut dirs: Vec<(String, f64)> = table.prefix_dirs[prefix]
                .iter()
                .map(|(dir, pct)| (dir.clone(), *pct))
                .collect();
            dirs.sort_by(|a, b| b.1.total_cmp(&a.1));
            (prefix.clone(), dirs)
        })
        .collect()
}

/// Rank the known prefixes for each folder. The matching percentages are
/// rescaled to sum to 100, turning the answer into "given this directory
/// was touched by one of the known prefixes, which prefix is it". A folder
/// no prefix ever touched still appears, with an empty list.
pub fn recommend<I, S>(table: &AttributionTable, folders: I) -> Recommendations
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut recommendations = Recommendations::new();
    for folder in folders {
        let key = folder_key(folder.as_ref());
        let pairs = recommendations.entry(key.clone()).or_default();
        for (prefix, dirs) in &table.prefix_dirs {
            if let Some(pct) = dirs.get(&key) {
                pairs.push((prefix.clone(), *pct));
            }
        }
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
    }

    for pairs in recommendations.values_mut() {
        let total: f64 = pairs.iter().map(|(_, pct)| pct).sum();
        if total > 0.0 {
            for (_, pct) in pairs.iter_mut() {
                *pct = round2(*pct / total * 100.0);
            }
        }
    }

    recommendations
}

/// Normalize a query argument to a directory key: an existing file becomes
/// its parent directory, anything else just loses a trailing separator.
fn folder_key(folder: &str) -> String {
    let path = Path::new(folder);
    if path.is_file() {
        path.parent()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        folder.trim_end_matches('/').to_string()
    }
}
