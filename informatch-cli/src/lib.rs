//! Command-line interface for ranking Informatch populations.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod nearest;
mod rank;
mod sources;

pub use error::CliError;

use nearest::NearestArgs;
use rank::RankArgs;

const ARG_PERSON_ID: &str = "person-id";
const ARG_DATASET: &str = "dataset";
const ARG_INTERESTS: &str = "interests";
const ARG_INTEREST: &str = "interest";
const ARG_LIMIT: &str = "limit";
const ARG_CATEGORY_WEIGHT: &str = "category-weight";
const ARG_SPECIFIC_CATEGORY_WEIGHT: &str = "specific-category-weight";
const ARG_MULTIPLE_INTERESTS_WEIGHT: &str = "multiple-interests-weight";
const ARG_DISTANCE_WEIGHT: &str = "distance-weight";
const ARG_FORMER_MATCH_WEIGHT: &str = "former-match-weight";
const ENV_RANK_PERSON_ID: &str = "INFORMATCH_CMDS_RANK_PERSON_ID";
const ENV_RANK_DATASET: &str = "INFORMATCH_CMDS_RANK_DATASET";
const ENV_NEAREST_PERSON_ID: &str = "INFORMATCH_CMDS_NEAREST_PERSON_ID";
const ENV_NEAREST_DATASET: &str = "INFORMATCH_CMDS_NEAREST_DATASET";
const ENV_NEAREST_INTEREST: &str = "INFORMATCH_CMDS_NEAREST_INTEREST";

/// Run the Informatch CLI with the current process arguments and environment.
///
/// Command output is written to standard output as pretty-printed JSON.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Rank(args) => rank::run_rank_with(args, writer),
        Command::Nearest(args) => nearest::run_nearest_with(args, writer),
    }
}

/// Write `value` as pretty-printed JSON followed by a newline.
fn write_json<T: serde::Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "informatch",
    about = "Score and rank candidate matches from a population dataset",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank every other person in the dataset for one person.
    Rank(RankArgs),
    /// Find the closest person sharing an interest.
    Nearest(NearestArgs),
}

#[cfg(test)]
mod tests;
