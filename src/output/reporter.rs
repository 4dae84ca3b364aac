use crate::attribution::query::Recommendations;
use crate::attribution::AttributionTable;
use crate::git::StagedCounts;
use colored::*;

/// Formats query results for the terminal. Pure presentation: percentages
/// arrive already rounded, orderings already decided.
#[derive(Default)]
pub struct Reporter;

impl Reporter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_distribution(
        &self,
        table: &AttributionTable,
        listing: &[(String, Vec<(String, f64)>)],
    ) {
        for (prefix, dirs) in listing {
            let occurrences = table.prefix_counts.get(prefix).copied().unwrap_or(0);
            println!("{}", format_distribution_line(prefix, occurrences, dirs));
        }
    }

    pub fn print_recommendations(
        &self,
        recommendations: &Recommendations,
        staged: Option<&StagedCounts>,
    ) {
        for (folder, pairs) in recommendations {
            let staged_count = staged.and_then(|counts| counts.get(folder)).copied();
            println!("{}", format_recommendation_line(folder, staged_count, pairs));
        }
    }
}

fn format_distribution_line(prefix: &str, occurrences: usize, dirs: &[(String, f64)]) -> String {
    format!(
        "{} ({} occurrences): {}",
        prefix.bright_cyan().bold(),
        occurrences,
        join_percent_pairs(dirs)
    )
}

fn format_recommendation_line(folder: &str, staged: Option<usize>, pairs: &[(String, f64)]) -> String {
    let staged_suffix = match staged {
        Some(1) => " (1 change)".to_string(),
        Some(count) => format!(" ({} changes)", count),
        None => String::new(),
    };
    format!(
        "{}{}: {}",
        folder.bright_white().bold(),
        staged_suffix,
        join_percent_pairs(pairs)
    )
}

fn join_percent_pairs(pairs: &[(String, f64)]) -> String {
    pairs
        .iter()
        .map(|(name, pct)| format!("{} ({}%)", name, pct))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn distribution_line_lists_pairs_in_order() {
        plain();
        let line = format_distribution_line(
            "feat",
            3,
            &[("ui".to_string(), 66.67), ("core".to_string(), 33.33)],
        );
        assert_eq!(line, "feat (3 occurrences): ui (66.67%), core (33.33%)");
    }

    #[test]
    fn recommendation_line_without_staged_suffix() {
        plain();
        let line = format_recommendation_line("ui", None, &[("feat".to_string(), 100.0)]);
        assert_eq!(line, "ui: feat (100%)");
    }

    #[test]
    fn staged_suffix_is_singular_at_exactly_one() {
        plain();
        let one = format_recommendation_line("ui", Some(1), &[("feat".to_string(), 100.0)]);
        assert_eq!(one, "ui (1 change): feat (100%)");

        let three = format_recommendation_line("ui", Some(3), &[("feat".to_string(), 100.0)]);
        assert_eq!(three, "ui (3 changes): feat (100%)");
    }

    #[test]
    fn empty_recommendation_renders_bare_folder() {
        plain();
        assert_eq!(format_recommendation_line("ui", None, &[]), "ui: ");
    }
}
