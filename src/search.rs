//! Inverse search: which numbers end in a cycle of a given length.
//!
//! Each candidate is computed from scratch; nothing is cached between calls.

use std::collections::BTreeMap;

use crate::cycle;
use crate::model::Power;

/// All `n` in `1..=ceiling` whose squared-digit trajectory has a cycle of
/// exactly `target` steps, ascending.
///
/// `find_by_cycle_length(1, ceiling)` lists the happy numbers.
pub fn find_by_cycle_length(target: usize, ceiling: u64) -> Vec<u64> {
    find_by_cycle_length_with(target, ceiling, Power::SQUARE)
}

/// [`find_by_cycle_length`] under any power.
pub fn find_by_cycle_length_with(target: usize, ceiling: u64, power: Power) -> Vec<u64> {
    (1..=ceiling)
        .filter(|&n| cycle::compute(n, power).cycle_length == target)
        .collect()
}

/// How many `n` in `1..=ceiling` end in each cycle length.
pub fn cycle_length_histogram(ceiling: u64, power: Power) -> BTreeMap<usize, u64> {
    let mut histogram: BTreeMap<usize, u64> = BTreeMap::new();
    for n in 1..=ceiling {
        let length = cycle::compute(n, power).cycle_length;
        *histogram.entry(length).or_default() += 1;
    }
    histogram
}
