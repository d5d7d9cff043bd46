//! Hall of fame: record holders over a range of start numbers.

use serde::Serialize;

use crate::cycle;
use crate::model::Power;

/// A record: the number that holds it and the value it set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feat {
    pub number: u64,
    pub value: usize,
}

/// Record holders over `1..=ceiling`. The first number to reach a value keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFame {
    pub longest_cycle: Option<Feat>,
    pub shortest_cycle: Option<Feat>,
    pub most_steps: Option<Feat>,
    pub fastest_convergence: Option<Feat>,
}

/// Scans every start number in `1..=ceiling` under `power`.
pub fn scan(ceiling: u64, power: Power) -> HallOfFame {
    let mut hall = HallOfFame::default();

    for number in 1..=ceiling {
        let result = cycle::compute(number, power);
        let cycle_length = result.cycle_length;
        let steps = result.steps.len();

        challenge(&mut hall.longest_cycle, number, cycle_length, |new, old| new > old);
        if cycle_length > 0 {
            challenge(&mut hall.shortest_cycle, number, cycle_length, |new, old| {
                new < old
            });
        }
        challenge(&mut hall.most_steps, number, steps, |new, old| new > old);
        challenge(&mut hall.fastest_convergence, number, steps, |new, old| {
            new < old
        });
    }

    hall
}

/// Replaces the holder when `beats(value, current)` holds, or when vacant.
fn challenge(
    holder: &mut Option<Feat>,
    number: u64,
    value: usize,
    beats: impl Fn(usize, usize) -> bool,
) {
    if holder.is_none_or(|feat| beats(value, feat.value)) {
        *holder = Some(Feat { number, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feat(number: u64, value: usize) -> Option<Feat> {
        Some(Feat { number, value })
    }

    #[test]
    fn squares_up_to_100() {
        let hall = scan(100, Power::SQUARE);

        assert_eq!(hall.longest_cycle, feat(2, 8));
        assert_eq!(hall.shortest_cycle, feat(1, 1));
        assert_eq!(hall.most_steps, feat(6, 17));
        assert_eq!(hall.fastest_convergence, feat(1, 1));
    }

    #[test]
    fn empty_range_has_no_records() {
        assert_eq!(scan(0, Power::SQUARE), HallOfFame::default());
    }

    #[test]
    fn first_number_keeps_a_tie() {
        // 2 and 3 both have cycle length 8; 2 came first.
        let hall = scan(3, Power::SQUARE);
        assert_eq!(hall.longest_cycle, feat(2, 8));
    }
}
