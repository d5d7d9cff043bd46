//! The exponent applied to every digit.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors from constructing a [`Power`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PowerError {
    #[error("power must be between {min} and {max}, got {value}", min = Power::MIN, max = Power::MAX)]
    OutOfRange { value: u32 },
}

/// A validated digit exponent.
///
/// Capped at [`Power::MAX`] so that a sum over the 20 digits of any `u64`
/// still fits in a `u64`: `20 × 9^16 < 2^64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Power(u32);

impl Power {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 16;

    /// Squares: the classic happy-number map.
    pub const SQUARE: Self = Self(2);

    pub fn new(value: u32) -> Result<Self, PowerError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PowerError::OutOfRange { value })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Display suffix for a digit raised to this power: `²`, `³`, … `¹⁰`, else `^p`.
    pub fn superscript(self) -> String {
        match self.0 {
            2 => "²".to_string(),
            3 => "³".to_string(),
            4 => "⁴".to_string(),
            5 => "⁵".to_string(),
            6 => "⁶".to_string(),
            7 => "⁷".to_string(),
            8 => "⁸".to_string(),
            9 => "⁹".to_string(),
            10 => "¹⁰".to_string(),
            p => format!("^{p}"),
        }
    }
}

impl Default for Power {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl TryFrom<u32> for Power {
    type Error = PowerError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Power> for u32 {
    fn from(power: Power) -> Self {
        power.0
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
