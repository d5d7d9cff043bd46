//! Output formatting for CLI display.

use cycles::game::{Guess, Scoreboard, Verdict};
use cycles::hall_of_fame::Feat;
use cycles::model::{CalculationResult, Record};

/// One line per step. `▶` marks the cycle start, `•` the rest of the cycle.
pub(super) fn format_steps(result: &CalculationResult) -> String {
    let width = result
        .steps
        .iter()
        .map(|s| s.original_number.to_string().len())
        .max()
        .unwrap_or(1);

    result
        .steps
        .iter()
        .map(|step| {
            let marker = if step.is_cycle_start {
                '▶'
            } else if step.is_in_cycle {
                '•'
            } else {
                ' '
            };
            format!(
                "{marker} {:>4}  {:>width$}  {}",
                step.step_number, step.original_number, step.calculation
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `4 → 16 → 37 → … → 20 → 4`: the cycle, closed back on its first value.
pub(super) fn format_cycle(result: &CalculationResult) -> String {
    let cycle = result.cycle();
    let Some(first) = cycle.first() else {
        return String::new();
    };
    let mut parts: Vec<String> = cycle.iter().map(u64::to_string).collect();
    parts.push(first.to_string());
    parts.join(" → ")
}

pub(super) fn format_statistics(result: &CalculationResult) -> String {
    format!(
        "Total steps: {}  Cycle length: {}  Steps before cycle: {}",
        result.steps.len(),
        result.cycle_length,
        result.steps_before_cycle()
    )
}

/// One-line summary for multi-number output.
pub(super) fn format_summary(number: u64, result: &CalculationResult) -> String {
    let mut line = format!(
        "{number}: {} steps, cycle length {}",
        result.steps.len(),
        result.cycle_length
    );
    if result.is_happy() {
        line.push_str(" (happy)");
    }
    if !result.is_reliable() {
        line.push_str(" (cut off)");
    }
    line
}

/// `a3b0fc12  2026-10-19 14:03  19²  cycle 1`
pub(super) fn format_record(record: &Record) -> String {
    format!(
        "{}  {}  {}{}  cycle {}",
        record.short_id(),
        record.added_at.strftime("%Y-%m-%d %H:%M"),
        record.input_number,
        record.power.superscript(),
        record.result.cycle_length
    )
}

pub(super) fn format_feat(title: &str, feat: Option<Feat>) -> String {
    match feat {
        Some(Feat { number, value }) => format!("{title:<22} {number} ({value})"),
        None => format!("{title:<22} -"),
    }
}

pub(super) fn format_guess(guess: Guess) -> &'static str {
    match guess {
        Guess::Short => "short",
        Guess::Long => "long",
    }
}

pub(super) fn format_verdict(verdict: &Verdict) -> String {
    let outcome = if verdict.correct { "Correct" } else { "Wrong" };
    format!(
        "{outcome}: {} has a cycle of length {} ({}).",
        verdict.number,
        verdict.cycle_length,
        format_guess(verdict.answer())
    )
}

pub(super) fn format_scoreboard(board: &Scoreboard) -> String {
    format!(
        "Score: {}  Streak: {}  Best streak: {}  Rounds: {}",
        board.score, board.streak, board.best_streak, board.rounds
    )
}
