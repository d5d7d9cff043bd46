//! CLI interface for cycles.
//!
//! Each subcommand is non-interactive: arguments in, text (or JSON) out.
//!
//! - `cycles compute|search|stats|records`: explore trajectories.
//! - `cycles history|favorites`: stored calculations.
//! - `cycles game`: guess whether a cycle is short or long.
//!
//! `--power` applies to every command that computes; see [`Config`] for how
//! it falls back when omitted.

mod explore;
mod format;
mod game;
mod shelf;

use clap::{Parser, Subcommand};

use cycles::config::Config;
use cycles::model::Power;
use cycles::storage::{RecordStore, ScoreStore};

use game::GameCommand;
use shelf::{FavoritesCommand, HistoryCommand};

/// Cycles: follow digit-power sums until they repeat.
#[derive(Debug, Parser)]
#[command(name = "cycles", version, after_long_help = EXAMPLES_HELP)]
pub struct Cli {
    /// Digit power, 1 to 16. Falls back to `CYCLES_POWER`, the config file, then 2.
    #[arg(long, short, global = true)]
    power: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

const EXAMPLES_HELP: &str = r"Examples:
  cycles compute 19              → 19 → 82 → 68 → 100 → 1 → 1
  cycles compute 4, 7 145        → one summary line per number
  cycles compute 15 --power 3    → cubes instead of squares
  cycles search 1 --ceiling 50   → happy numbers up to 50
  cycles favorites add 19
  cycles game play";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the trajectory of one or more numbers.
    ///
    /// Numbers may be separated by commas and/or spaces.
    /// A single number prints every step; several print one line each.
    /// Each calculation is recorded in history.
    Compute {
        /// Non-negative integers.
        #[arg(required = true, num_args = 1..)]
        numbers: Vec<String>,

        /// Print the calculation results as JSON.
        #[arg(long)]
        json: bool,

        /// Don't record these calculations in history.
        #[arg(long)]
        no_history: bool,
    },

    /// List the numbers up to a ceiling whose cycle has a given length.
    Search {
        /// Cycle length to look for (1 finds happy numbers under squares).
        cycle: usize,

        /// Highest number to test (defaults to `search-ceiling`).
        #[arg(long)]
        ceiling: Option<u64>,
    },

    /// Group the numbers up to a ceiling by cycle length.
    Stats {
        /// Highest number to test (defaults to `search-ceiling`).
        #[arg(long)]
        ceiling: Option<u64>,
    },

    /// Hall of fame: record holders up to a ceiling.
    Records {
        /// Highest number to test (defaults to `records-ceiling`).
        #[arg(long)]
        ceiling: Option<u64>,

        /// Print the records as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Browse and manage calculation history.
    History {
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Keep numbers worth coming back to.
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },

    /// Guess whether a number's cycle is short (≤ 5) or long.
    Game {
        #[command(subcommand)]
        command: GameCommand,
    },
}

/// Run a parsed command line, returning an error message on failure.
pub fn run<S: RecordStore + ScoreStore>(
    cli: Cli,
    config: &Config,
    store: &S,
) -> Result<(), String> {
    match cli.command {
        Command::Compute {
            numbers,
            json,
            no_history,
        } => {
            let power = resolve_power(config, cli.power)?;
            let history = (!no_history).then_some(store);
            explore::cmd_compute(config, history, &numbers.join(" "), power, json)
        }
        Command::Search { cycle, ceiling } => {
            let power = resolve_power(config, cli.power)?;
            explore::cmd_search(cycle, ceiling.unwrap_or(config.search_ceiling), power);
            Ok(())
        }
        Command::Stats { ceiling } => {
            let power = resolve_power(config, cli.power)?;
            explore::cmd_stats(ceiling.unwrap_or(config.search_ceiling), power);
            Ok(())
        }
        Command::Records { ceiling, json } => {
            let power = resolve_power(config, cli.power)?;
            explore::cmd_records(ceiling.unwrap_or(config.records_ceiling), power, json)
        }
        Command::History { command } => shelf::run_history(config, store, command),
        Command::Favorites { command } => {
            shelf::run_favorites(config, store, command, || resolve_power(config, cli.power))
        }
        Command::Game { command } => game::run(store, command),
    }
}

fn resolve_power(config: &Config, explicit: Option<u32>) -> Result<Power, String> {
    config
        .resolve_power(explicit)
        .map_err(|e| format!("invalid power: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use cycles::storage::MemoryStore;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn compute_accepts_several_numbers_and_global_power() {
        let cli = Cli::try_parse_from(["cycles", "compute", "19,", "7", "--power", "3"]).unwrap();

        assert_eq!(cli.power, Some(3));
        assert!(matches!(
            cli.command,
            Command::Compute { ref numbers, json: false, no_history: false } if numbers == &["19,", "7"]
        ));
    }

    #[test]
    fn help_and_version_need_no_config() {
        let help = Cli::try_parse_from(["cycles", "--help"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);

        let version = Cli::try_parse_from(["cycles", "--version"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn run_reports_a_bad_power_before_touching_the_store() {
        let cli = Cli::try_parse_from(["cycles", "search", "1", "--power", "17"]).unwrap();
        let err = run(cli, &Config::default(), &MemoryStore::new()).unwrap_err();
        assert!(err.contains("invalid power"), "{err}");
    }

    #[test]
    fn compute_requires_a_number() {
        assert!(Cli::try_parse_from(["cycles", "compute"]).is_err());
    }

    #[test]
    fn search_takes_cycle_and_ceiling() {
        let cli = Cli::try_parse_from(["cycles", "search", "1", "--ceiling", "50"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Search {
                cycle: 1,
                ceiling: Some(50)
            }
        ));
    }
}
