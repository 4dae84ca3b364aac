use super::{parent_dir, StagedCounts};
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Reads commit metadata out of the repository in the current working
/// directory. Git itself is treated as an opaque command producing text;
/// both readers consume its full output before returning.
pub struct HistoryReader;

impl HistoryReader {
    pub fn new() -> Self {
        Self
    }

    /// Full commit log as a flat line stream: each commit's subject line
    /// followed by the file paths it touched, in commit order.
    pub fn commit_log(&self) -> Result<Vec<String>> {
        let output = run_git(&["log", "--pretty=format:%s", "--name-only"])?;
        let lines: Vec<String> = output.lines().map(str::to_string).collect();

        info!("Fetched {} history lines from git log", lines.len());
        Ok(lines)
    }

    /// Directories with staged changes, each mapped to the number of staged
    /// files under it. Staged paths that no longer exist on disk are
    /// skipped; root-level files have no directory and are dropped.
    pub fn staged_directories(&self) -> Result<StagedCounts> {
        let output = run_git(&["diff", "--name-only", "--cached"])?;

        let mut counts = StagedCounts::new();
        for line in output.lines() {
            if !Path::new(line).exists() {
                debug!("Skipping staged path no longer on disk: {}", line);
                continue;
            }
            if let Some(dir) = parent_dir(line) {
                *counts.entry(dir).or_insert(0) += 1;
            }
        }

        info!("Found staged changes in {} directories", counts.len());
        Ok(counts)
    }
}

impl Default for HistoryReader {
    fn default() -> Self {
        Self::new()
    }
}

fn run_git(args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run `git {}`. Is git installed?", args.join(" ")))?;

    if !output.status.success() {
        bail!(
            "`git {}` exited with {}: {}",
            args.join(" "),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
