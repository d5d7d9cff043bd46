//! Guessing game: is this number's squared-digit cycle short or long?
//!
//! A round deals a number onto the [`Scoreboard`]; the player guesses;
//! [`judge`] reveals the answer. Only the dealt number can be scored, once.
//! Correct guesses score [`POINTS_PER_WIN`] and extend the streak.

use serde::{Deserialize, Serialize};

use crate::cycle;
use crate::model::Power;

/// Longest cycle that still counts as short.
pub const SHORT_CYCLE_MAX: usize = 5;

pub const POINTS_PER_WIN: u64 = 10;

/// Happy numbers up to 300: cycle length 1.
const SHORT_POOL: &[u64] = &[
    1, 7, 10, 13, 19, 23, 28, 31, 32, 44, 49, 68, 70, 79, 82, 86, 91, 94, 97, 100, 103, 109, 129,
    130, 133, 139, 167, 176, 188, 190, 192, 193, 203, 208, 219, 226, 230, 236, 239, 262, 263, 280,
    291, 293,
];

/// Numbers that fall into the eight-cycle.
const LONG_POOL: &[u64] = &[
    2, 3, 4, 5, 6, 8, 9, 11, 12, 14, 15, 16, 17, 18, 20, 21, 22, 24, 25, 26, 27, 29, 30, 33, 34,
    35, 36, 37, 38, 39, 40, 41, 42, 43, 45, 46, 47, 48, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60,
    61,
];

/// The player's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Guess {
    Short,
    Long,
}

/// The revealed outcome of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub number: u64,
    pub cycle_length: usize,
    pub guess: Guess,
    pub correct: bool,
}

impl Verdict {
    pub fn answer(&self) -> Guess {
        if self.cycle_length <= SHORT_CYCLE_MAX {
            Guess::Short
        } else {
            Guess::Long
        }
    }
}

/// Why a guess could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("no round in play; deal one with `cycles game play`")]
    NoRound,

    #[error("{guessed} is not the number in play ({dealt})")]
    WrongNumber { dealt: u64, guessed: u64 },
}

/// Running totals across rounds, plus the number currently in play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub score: u64,
    pub streak: u64,
    pub best_streak: u64,
    pub rounds: u64,

    /// Dealt by [`Scoreboard::deal`], cleared once scored.
    #[serde(default)]
    pub pending: Option<u64>,
}

impl Scoreboard {
    /// Starts a round on `number`. An unanswered round is abandoned.
    pub fn deal(&mut self, number: u64) {
        self.pending = Some(number);
    }

    /// Judges `guess` against the dealt number, records it, and ends the round.
    pub fn settle(&mut self, number: u64, guess: Guess) -> Result<Verdict, RoundError> {
        let dealt = self.pending.ok_or(RoundError::NoRound)?;
        if number != dealt {
            return Err(RoundError::WrongNumber {
                dealt,
                guessed: number,
            });
        }

        let verdict = judge(dealt, guess);
        self.record(&verdict);
        self.pending = None;
        Ok(verdict)
    }

    pub fn record(&mut self, verdict: &Verdict) {
        self.rounds += 1;
        if verdict.correct {
            self.score += POINTS_PER_WIN;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }
}

/// Picks a round's number from `seed`: a coin flip between the short and
/// long pools, then an entry within the chosen pool.
pub fn pick_number(seed: u128) -> u64 {
    let pool = if seed & 1 == 0 { SHORT_POOL } else { LONG_POOL };
    let len = pool.len() as u128;
    // `len` is non-zero and the remainder is below it, so the cast cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    let index = ((seed >> 1) % len) as usize;
    pool[index]
}

/// Reveals the answer for `number` and checks the guess.
pub fn judge(number: u64, guess: Guess) -> Verdict {
    let cycle_length = cycle::compute(number, Power::SQUARE).cycle_length;
    let mut verdict = Verdict {
        number,
        cycle_length,
        guess,
        correct: false,
    };
    verdict.correct = verdict.answer() == guess;
    verdict
}
