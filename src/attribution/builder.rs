use super::AttributionTable;
use crate::git::parent_dir;
use tracing::debug;

/// The builder's only state: whether a usable prefix is currently active.
/// A prefix stays active across commit boundaries until another qualifying
/// subject line replaces it.
#[derive(Debug, Default)]
enum PrefixState {
    #[default]
    NoPrefixActive,
    PrefixActive(String),
}

/// One line of the flat history stream, classified positionally.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Contains a `:` and does not start with `Merge`; carries the trimmed
    /// token left of the first `:`.
    Subject(&'a str),
    /// Any other non-empty line, taken to be a changed file path.
    Path(&'a str),
    Blank,
}

fn classify(line: &str) -> Line<'_> {
    if let Some((prefix, _)) = line.split_once(':') {
        if !line.starts_with("Merge") {
            return Line::Subject(prefix.trim());
        }
    }
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Line::Blank
    } else {
        Line::Path(trimmed)
    }
}

/// Two-state machine over the flat `git log` line stream. The stream is
/// deliberately not re-segmented per commit: a commit whose subject carries
/// no `:` leaves the previous prefix active, and its paths accrue there.
/// Recommendation output depends on that attribution.
#[derive(Debug, Default)]
pub struct AttributionBuilder {
    state: PrefixState,
    table: AttributionTable,
}

impl AttributionBuilder {
    /// Consume the whole line stream and return the normalized table.
    pub fn build<I, S>(lines: I) -> AttributionTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::default();
        for line in lines {
            builder.consume(line.as_ref());
        }
        builder.finish()
    }

    fn consume(&mut self, line: &str) {
        match classify(line) {
            Line::Subject(prefix) => {
                *self
                    .table
                    .prefix_counts
                    .entry(prefix.to_string())
                    .or_insert(0) += 1;
                // An empty token still counts as a commit under the empty
                // prefix, but cannot anchor paths.
                self.state = if prefix.is_empty() {
                    PrefixState::NoPrefixActive
                } else {
                    PrefixState::PrefixActive(prefix.to_string())
                };
            }
            Line::Path(path) => {
                if let PrefixState::PrefixActive(prefix) = &self.state {
                    if let Some(dir) = parent_dir(path) {
                        *self
                            .table
                            .prefix_dirs
                            .entry(prefix.clone())
                            .or_default()
                            .entry(dir)
                            .or_insert(0.0) += 1.0;
                    }
                }
            }
            Line::Blank => {}
        }
    }

    fn finish(mut self) -> AttributionTable {
        self.table.normalize();
        debug!(
            "Attributed directories for {} prefixes",
            self.table.prefix_dirs.len()
        );
        self.table
    }
}
