//! The digit-power cycle detector.
//!
//! Starting from a number, repeatedly replace it with the sum of its decimal
//! digits raised to a fixed power, until some value comes back around.
//!
//! ```text
//! 19 → 1² + 9² = 82 → 68 → 100 → 1 → 1
//!                                └──┘ cycle of length 1
//! ```
//!
//! Every value is remembered with the step at which it first appeared, so the
//! first repeat identifies both where the cycle starts and how long it is.
//! The loop is bounded by [`MAX_STEPS`]; a run that hits the bound is marked
//! [`Termination::CutOff`] instead of pretending it found a cycle.

use std::collections::HashMap;

use crate::model::{CalculationResult, CalculationStep, Power, Termination};

/// Safety bound on iterations. A trajectory never holds more than
/// `MAX_STEPS + 1` steps.
pub const MAX_STEPS: usize = 1000;

/// Computes the digit-power trajectory of `num` and classifies its cycle.
///
/// Pure and total: every `u64` input with any valid [`Power`] yields a result.
pub fn compute(num: u64, power: Power) -> CalculationResult {
    trace(num, power, MAX_STEPS)
}

/// [`compute`] with an explicit step bound.
fn trace(num: u64, power: Power, limit: usize) -> CalculationResult {
    let mut steps = Vec::new();
    let mut seen: HashMap<u64, usize> = HashMap::new();
    let mut current = num;
    let mut step_number = 0;

    while !seen.contains_key(&current) {
        seen.insert(current, step_number);

        let digits = digits(current);
        let powered: Vec<u64> = digits.iter().map(|&d| digit_power(d, power)).collect();
        let sum: u64 = powered.iter().sum();

        steps.push(CalculationStep {
            step_number,
            original_number: current,
            calculation: render_calculation(&digits, &powered, sum, power),
            digits,
            result: sum,
            is_in_cycle: false,
            is_cycle_start: false,
        });

        current = sum;
        step_number += 1;

        if step_number > limit {
            break;
        }
    }

    // The loop body runs at least once, so `steps` is never empty.
    let (cycle_start_index, termination) = match seen.get(&current) {
        Some(&index) => (index, Termination::Repeated),
        None => {
            tracing::warn!(
                num,
                power = power.get(),
                limit,
                "no repeat within step bound; cycle data is unreliable"
            );
            (steps.len() - 1, Termination::CutOff)
        }
    };
    let cycle_length = step_number - cycle_start_index;

    for step in steps.iter_mut().skip(cycle_start_index) {
        step.is_in_cycle = true;
    }
    if let Some(step) = steps.get_mut(cycle_start_index) {
        step.is_cycle_start = true;
    }

    tracing::debug!(
        num,
        power = power.get(),
        steps = steps.len(),
        cycle_start_index,
        cycle_length,
        "computed trajectory"
    );

    CalculationResult {
        steps,
        cycle_start_index,
        cycle_length,
        termination,
    }
}

/// Decimal digits of `n`, most significant first. `0` yields `[0]`.
pub fn digits(n: u64) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}

/// Sum of each digit raised to `power`.
pub fn digit_power_sum(digits: &[u8], power: Power) -> u64 {
    digits.iter().map(|&d| digit_power(d, power)).sum()
}

fn digit_power(digit: u8, power: Power) -> u64 {
    u64::from(digit).pow(power.get())
}

/// `1² + 9² = 1 + 81 = 82`
fn render_calculation(digits: &[u8], powered: &[u64], sum: u64, power: Power) -> String {
    let superscript = power.superscript();
    let terms = digits
        .iter()
        .map(|d| format!("{d}{superscript}"))
        .collect::<Vec<_>>()
        .join(" + ");
    let values = powered
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" + ");
    format!("{terms} = {values} = {sum}")
}
