//! Digit-power cycles.
//!
//! Replace a number with the sum of its digits raised to a fixed power, over
//! and over, until a value repeats. [`cycle::compute`] records every step and
//! where the cycle begins; the other modules build on that one routine.

pub mod config;
pub mod cycle;
pub mod game;
pub mod hall_of_fame;
pub mod input;
pub mod model;
pub mod search;
pub mod storage;
