//! Core data model for cycles.
//!
//! A calculation is a trajectory of steps under a digit power.
//! Records wrap calculations for the history and favorites shelves.

mod calculation;
mod power;
mod record;

pub use calculation::{CalculationResult, CalculationStep, Termination};
pub use power::{Power, PowerError};
pub use record::{Record, Shelf};
