//! Calculation types: one trajectory and the steps that make it up.

use serde::{Deserialize, Serialize};

/// One iteration of the trajectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationStep {
    /// Zero-based position in the trajectory.
    pub step_number: usize,

    /// The value transformed at this step.
    pub original_number: u64,

    /// Decimal digits of `original_number`, most significant first.
    pub digits: Vec<u8>,

    /// Human-readable rendering, e.g. `1² + 9² = 1 + 81 = 82`. Display only.
    pub calculation: String,

    /// Sum of each digit raised to the power.
    pub result: u64,

    pub is_in_cycle: bool,
    pub is_cycle_start: bool,
}

/// How the trajectory loop ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Termination {
    /// A value came back around. The cycle fields describe a real cycle.
    #[default]
    Repeated,

    /// The step bound fired before any value repeated.
    /// `cycle_length` is a fallback, not a measured period.
    CutOff,
}

/// The output of one full run of the detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub steps: Vec<CalculationStep>,
    pub cycle_start_index: usize,
    pub cycle_length: usize,

    /// Older stored records predate this field; they always terminated normally.
    #[serde(default)]
    pub termination: Termination,
}

impl CalculationResult {
    /// The trajectory values, starting with the input.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.steps.iter().map(|s| s.original_number)
    }

    /// The values that make up the cycle, in the order they are visited.
    pub fn cycle(&self) -> Vec<u64> {
        self.steps
            .iter()
            .filter(|s| s.is_in_cycle)
            .map(|s| s.original_number)
            .collect()
    }

    pub fn steps_before_cycle(&self) -> usize {
        self.cycle_start_index
    }

    /// Whether the trajectory settled on the fixed point 1.
    pub fn is_happy(&self) -> bool {
        self.is_reliable() && self.cycle_length == 1 && self.cycle() == [1]
    }

    /// Whether the cycle fields describe a genuine repeat.
    pub fn is_reliable(&self) -> bool {
        self.termination == Termination::Repeated
    }
}
