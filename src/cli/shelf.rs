//! History and favorites commands.

use clap::Subcommand;

use cycles::config::Config;
use cycles::model::{Power, Shelf};
use cycles::storage::{Journal, RecordStore};
use cycles::{cycle, input};

use super::format::{format_cycle, format_record, format_statistics, format_steps};

#[derive(Debug, Subcommand)]
pub enum HistoryCommand {
    /// List recorded calculations, most recent first.
    List,

    /// Show the full trajectory of a recorded calculation.
    Show {
        /// Record ID: full UUID or unambiguous prefix (e.g. `a3b`).
        id: String,
    },

    /// Delete one recorded calculation.
    Delete {
        /// Record ID: full UUID or unambiguous prefix.
        id: String,
    },

    /// Delete all history.
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List favorite numbers, most recently added first.
    List,

    /// Add a number to favorites. Does nothing if it is already there.
    Add {
        /// Non-negative integer.
        number: String,
    },

    /// Remove a number from favorites.
    Remove {
        /// Non-negative integer.
        number: String,
    },
}

pub(super) fn run_history<S: RecordStore>(
    config: &Config,
    store: &S,
    command: HistoryCommand,
) -> Result<(), String> {
    let history = Journal::new(store, Shelf::History, config.history_capacity);

    match command {
        HistoryCommand::List => cmd_list(&history),
        HistoryCommand::Show { id } => {
            let record = history
                .resolve(&id)
                .map_err(|e| format!("failed to find record: {e}"))?;
            println!(
                "{} under power {} (recorded {}):",
                record.input_number,
                record.power,
                record.added_at.strftime("%Y-%m-%d %H:%M")
            );
            println!("{}", format_steps(&record.result));
            println!();
            println!("Cycle: {}", format_cycle(&record.result));
            println!("{}", format_statistics(&record.result));
            Ok(())
        }
        HistoryCommand::Delete { id } => {
            let record = history
                .resolve(&id)
                .map_err(|e| format!("failed to find record: {e}"))?;
            history
                .remove(record.id)
                .map_err(|e| format!("failed to delete record: {e}"))?;
            eprintln!("Deleted {}", record.short_id());
            Ok(())
        }
        HistoryCommand::Clear => {
            let removed = history
                .clear()
                .map_err(|e| format!("failed to clear history: {e}"))?;
            eprintln!("Cleared {removed} record(s)");
            Ok(())
        }
    }
}

/// `power` is only resolved when a favorite is added.
pub(super) fn run_favorites<S: RecordStore>(
    config: &Config,
    store: &S,
    command: FavoritesCommand,
    power: impl FnOnce() -> Result<Power, String>,
) -> Result<(), String> {
    let favorites = Journal::new(store, Shelf::Favorites, config.favorites_capacity);

    match command {
        FavoritesCommand::List => cmd_list(&favorites),
        FavoritesCommand::Add { number } => {
            let number = input::parse_number(&number).map_err(|e| e.to_string())?;
            let power = power()?;
            let added = favorites
                .add(number, power, cycle::compute(number, power))
                .map_err(|e| format!("failed to add favorite: {e}"))?;
            match added {
                Some(record) => eprintln!("Added {number} ({})", record.short_id()),
                None => eprintln!("{number} is already a favorite"),
            }
            Ok(())
        }
        FavoritesCommand::Remove { number } => {
            let number = input::parse_number(&number).map_err(|e| e.to_string())?;
            let removed = favorites
                .remove_number(number)
                .map_err(|e| format!("failed to remove favorite: {e}"))?;
            if removed == 0 {
                return Err(format!("{number} is not a favorite"));
            }
            eprintln!("Removed {number}");
            Ok(())
        }
    }
}

fn cmd_list<S: RecordStore>(journal: &Journal<'_, S>) -> Result<(), String> {
    let records = journal
        .list()
        .map_err(|e| format!("failed to list {}: {e}", journal.shelf()))?;

    if records.is_empty() {
        println!("No {}", journal.shelf());
        return Ok(());
    }

    for record in &records {
        println!("{}", format_record(record));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use cycles::storage::MemoryStore;

    fn square() -> Result<Power, String> {
        Ok(Power::SQUARE)
    }

    fn numbers(store: &MemoryStore, shelf: Shelf) -> Vec<u64> {
        store
            .list(shelf)
            .unwrap()
            .iter()
            .map(|r| r.input_number)
            .collect()
    }

    #[test]
    fn favorites_add_skips_duplicates_and_remove_deletes() {
        let store = MemoryStore::new();
        let config = Config::default();
        let add = |n: &str| FavoritesCommand::Add {
            number: n.to_string(),
        };

        run_favorites(&config, &store, add("19"), square).unwrap();
        run_favorites(&config, &store, add("4"), square).unwrap();
        run_favorites(&config, &store, add("19"), square).unwrap();
        assert_eq!(numbers(&store, Shelf::Favorites), vec![4, 19]);

        run_favorites(
            &config,
            &store,
            FavoritesCommand::Remove {
                number: "19".into(),
            },
            square,
        )
        .unwrap();
        assert_eq!(numbers(&store, Shelf::Favorites), vec![4]);
    }

    #[test]
    fn removing_a_number_that_is_not_a_favorite_fails() {
        let store = MemoryStore::new();
        let err = run_favorites(
            &Config::default(),
            &store,
            FavoritesCommand::Remove {
                number: "7".into(),
            },
            square,
        )
        .unwrap_err();

        assert_eq!(err, "7 is not a favorite");
    }

    #[test]
    fn favorites_add_reports_a_bad_power() {
        let store = MemoryStore::new();
        let err = run_favorites(
            &Config::default(),
            &store,
            FavoritesCommand::Add {
                number: "19".into(),
            },
            || Err("invalid power: out of range".to_string()),
        )
        .unwrap_err();

        assert!(err.contains("invalid power"));
        assert!(numbers(&store, Shelf::Favorites).is_empty());
    }

    #[test]
    fn history_delete_resolves_an_id_prefix() {
        let store = MemoryStore::new();
        let config = Config::default();
        let history = Journal::new(&store, Shelf::History, config.history_capacity);
        let kept = history
            .add(4, Power::SQUARE, cycle::compute(4, Power::SQUARE))
            .unwrap()
            .unwrap();
        let doomed = history
            .add(19, Power::SQUARE, cycle::compute(19, Power::SQUARE))
            .unwrap()
            .unwrap();

        let prefix = doomed.id.to_string()[..8].to_string();
        assert!(!kept.id.to_string().starts_with(&prefix));

        run_history(&config, &store, HistoryCommand::Delete { id: prefix }).unwrap();

        assert_eq!(numbers(&store, Shelf::History), vec![4]);
    }

    #[test]
    fn history_show_and_delete_fail_on_unknown_ids() {
        let store = MemoryStore::new();
        let config = Config::default();

        let err = run_history(&config, &store, HistoryCommand::Show { id: "zzz".into() })
            .unwrap_err();
        assert!(err.contains("no record matching 'zzz'"), "{err}");

        assert!(run_history(&config, &store, HistoryCommand::Delete { id: "zzz".into() }).is_err());
    }

    #[test]
    fn history_clear_empties_only_history() {
        let store = MemoryStore::new();
        let config = Config::default();
        run_favorites(
            &config,
            &store,
            FavoritesCommand::Add {
                number: "19".into(),
            },
            square,
        )
        .unwrap();
        Journal::new(&store, Shelf::History, config.history_capacity)
            .add(4, Power::SQUARE, cycle::compute(4, Power::SQUARE))
            .unwrap();

        run_history(&config, &store, HistoryCommand::Clear).unwrap();

        assert!(numbers(&store, Shelf::History).is_empty());
        assert_eq!(numbers(&store, Shelf::Favorites), vec![19]);
    }
}
