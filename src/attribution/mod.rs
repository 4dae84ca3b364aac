use indexmap::IndexMap;
use std::collections::HashMap;

pub mod builder;
pub mod query;

pub use builder::AttributionBuilder;

/// Directory -> touch count while building, directory -> percentage after
/// [`AttributionTable::normalize`]. Insertion order is preserved so equal
/// percentages keep their first-touch order when sorted.
pub type DirDistribution = IndexMap<String, f64>;

#[derive(Debug, Clone, Default)]
pub struct AttributionTable {
    /// Prefix -> directory -> count, replaced in place by percentage.
    pub prefix_dirs: IndexMap<String, DirDistribution>,
    /// Commits seen per prefix, independent of directory attribution.
    pub prefix_counts: HashMap<String, usize>,
}

impl AttributionTable {
    /// Replace each directory count with its share of the prefix total, as
    /// a percentage rounded to two decimals. Keys and key order are
    /// untouched. A prefix only exists after at least one directory
    /// increment, so the total is never zero. Applied exactly once, at the
    /// end of the build pass.
    pub fn normalize(&mut self) {
        for dirs in self.prefix_dirs.values_mut() {
            let total: f64 = dirs.values().sum();
            for count in dirs.values_mut() {
                *count = round2(*count / total * 100.0);
            }
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_keys_and_order() {
        let mut table = AttributionTable::default();
        let dirs = table.prefix_dirs.entry("feat".to_string()).or_default();
        dirs.insert("a".to_string(), 1.0);
        dirs.insert("b".to_string(), 2.0);

        table.normalize();

        let dirs = &table.prefix_dirs["feat"];
        assert_eq!(dirs.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(dirs["a"], 33.33);
        assert_eq!(dirs["b"], 66.67);
    }

    #[test]
    fn normalized_percentages_sum_to_100() {
        let mut table = AttributionTable::default();
        let dirs = table.prefix_dirs.entry("fix".to_string()).or_default();
        for (dir, count) in [("a", 3.0), ("b", 2.0), ("c", 1.0), ("d", 1.0)] {
            dirs.insert(dir.to_string(), count);
        }

        table.normalize();

        let total: f64 = table.prefix_dirs["fix"].values().sum();
        assert!((total - 100.0).abs() < 0.1, "sum was {total}");
    }

    #[test]
    fn round2_rounds_to_two_decimals() {
        assert_eq!(round2(1.0 / 3.0 * 100.0), 33.33);
        assert_eq!(round2(2.0 / 3.0 * 100.0), 66.67);
        assert_eq!(round2(100.0), 100.0);
    }
}
