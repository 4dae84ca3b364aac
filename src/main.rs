use anyhow::Result;
use clap::error::ErrorKind;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;

mod attribution;
mod git;
mod output;

use attribution::{query, AttributionBuilder};
use git::HistoryReader;
use output::Reporter;

/// Recommends conventional-commit prefixes from the repository's own history.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).multiple(false)))]
struct Cli {
    /// Display the full prefix -> directory percentage table
    #[arg(long, group = "mode")]
    all: bool,

    /// Recommend prefixes for the given folders
    #[arg(long, group = "mode", num_args = 1.., value_name = "FOLDER")]
    recommend: Option<Vec<String>>,

    /// Recommend prefixes for currently staged changes
    #[arg(long, group = "mode")]
    recommend_staged: bool,
}

/// Closed set of invocation modes, decoded once from the arguments.
enum Mode {
    All,
    Recommend(Vec<String>),
    RecommendStaged,
}

impl From<Cli> for Mode {
    fn from(cli: Cli) -> Self {
        if cli.all {
            Mode::All
        } else if let Some(folders) = cli.recommend {
            Mode::Recommend(folders)
        } else {
            // The required ArgGroup guarantees exactly one mode is set.
            Mode::RecommendStaged
        }
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                // Anything unrecognized gets the usage text and status 1,
                // before git is ever touched.
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let reader = HistoryReader::new();
    let reporter = Reporter::new();

    let table = AttributionBuilder::build(reader.commit_log()?);

    match Mode::from(cli) {
        Mode::All => {
            let listing = query::list_all(&table);
            reporter.print_distribution(&table, &listing);
        }
        Mode::Recommend(folders) => {
            let recommendations = query::recommend(&table, &folders);
            reporter.print_recommendations(&recommendations, None);
        }
        Mode::RecommendStaged => {
            let staged = reader.staged_directories()?;
            let recommendations = query::recommend(&table, staged.keys());
            reporter.print_recommendations(&recommendations, Some(&staged));
        }
    }

    Ok(())
}
