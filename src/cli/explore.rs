//! Exploration commands: compute, search, stats, records.

use cycles::config::Config;
use cycles::model::{Power, Shelf};
use cycles::storage::{Journal, RecordStore};
use cycles::{cycle, hall_of_fame, input, search};

use super::format::{format_cycle, format_feat, format_statistics, format_steps, format_summary};

/// Computes every number in `raw`, printing steps for one number and a
/// summary line each for several. Results go to history when a store is given.
pub(super) fn cmd_compute<S: RecordStore>(
    config: &Config,
    history: Option<&S>,
    raw: &str,
    power: Power,
    json: bool,
) -> Result<(), String> {
    let numbers = input::parse_numbers(raw).map_err(|e| e.to_string())?;
    let results: Vec<_> = numbers
        .iter()
        .map(|&n| (n, cycle::compute(n, power)))
        .collect();

    if json {
        let values: Vec<_> = results.iter().map(|(_, result)| result).collect();
        let serialized = if let [only] = values.as_slice() {
            serde_json::to_string_pretty(only)
        } else {
            serde_json::to_string_pretty(&values)
        };
        let out = serialized.map_err(|e| format!("failed to serialize results: {e}"))?;
        println!("{out}");
    } else if let [(number, result)] = results.as_slice() {
        println!("{number} under power {power}:");
        println!("{}", format_steps(result));
        println!();
        println!("Cycle: {}", format_cycle(result));
        println!("{}", format_statistics(result));
    } else {
        for (number, result) in &results {
            println!("{}", format_summary(*number, result));
        }
    }

    for (number, result) in &results {
        if !result.is_reliable() {
            eprintln!(
                "Warning: {number} did not repeat within {} steps; its cycle length is unreliable.",
                cycle::MAX_STEPS
            );
        }
    }

    // History is best effort: a failed write never fails the calculation.
    if let Some(store) = history {
        let journal = Journal::new(store, Shelf::History, config.history_capacity);
        for (number, result) in results {
            if let Err(e) = journal.add(number, power, result) {
                tracing::warn!(number, error = %e, "failed to record history");
            }
        }
    }

    Ok(())
}

pub(super) fn cmd_search(cycle_length: usize, ceiling: u64, power: Power) {
    let matches = search::find_by_cycle_length_with(cycle_length, ceiling, power);

    if matches.is_empty() {
        println!("No number up to {ceiling} has a cycle of length {cycle_length}");
        return;
    }

    let list: Vec<String> = matches.iter().map(u64::to_string).collect();
    println!(
        "{} number(s) up to {ceiling} with cycle length {cycle_length}:",
        matches.len()
    );
    println!("{}", list.join(", "));
}

pub(super) fn cmd_stats(ceiling: u64, power: Power) {
    let histogram = search::cycle_length_histogram(ceiling, power);

    if histogram.is_empty() {
        println!("Nothing to count up to {ceiling}");
        return;
    }

    println!("Cycle lengths for 1..={ceiling} under power {power}:");
    for (length, count) in &histogram {
        println!("  length {length:>3}: {count:>6} number(s)");
    }
}

pub(super) fn cmd_records(ceiling: u64, power: Power, json: bool) -> Result<(), String> {
    let hall = hall_of_fame::scan(ceiling, power);

    if json {
        let out = serde_json::to_string_pretty(&hall)
            .map_err(|e| format!("failed to serialize records: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    println!("Hall of fame for 1..={ceiling} under power {power}:");
    println!("{}", format_feat("Longest cycle", hall.longest_cycle));
    println!("{}", format_feat("Shortest cycle", hall.shortest_cycle));
    println!("{}", format_feat("Most steps", hall.most_steps));
    println!("{}", format_feat("Fastest convergence", hall.fastest_convergence));
    Ok(())
}
