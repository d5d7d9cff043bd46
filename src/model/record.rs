//! Stored calculations: history and favorites.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CalculationResult, Power};

/// A calculation kept on a shelf, wrapped with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: Uuid,
    pub input_number: u64,
    pub power: Power,
    pub result: CalculationResult,
    pub added_at: Timestamp,
}

impl Record {
    /// Wraps a fresh result with a new id, stamped now.
    pub fn new(input_number: u64, power: Power, result: CalculationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            input_number,
            power,
            result,
            added_at: Timestamp::now(),
        }
    }

    /// First eight characters of the id, for display and prefix lookup.
    pub fn short_id(&self) -> String {
        self.id.to_string()[..8].to_string()
    }
}

/// Which record list a record lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shelf {
    /// Every calculation, most recent first. Duplicates allowed.
    History,

    /// Numbers the user chose to keep. One record per input number.
    Favorites,
}

impl Shelf {
    /// Column value used by the SQLite store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Favorites => "favorites",
        }
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
