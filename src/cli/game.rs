//! Game commands: play, guess, score, reset.

use clap::{Subcommand, ValueEnum};
use uuid::Uuid;

use cycles::game::{self, Guess, SHORT_CYCLE_MAX, Scoreboard};
use cycles::input;
use cycles::storage::ScoreStore;

use super::format::{format_scoreboard, format_verdict};

#[derive(Debug, Subcommand)]
pub enum GameCommand {
    /// Deal a number to guess on. An unanswered round is abandoned.
    Play,

    /// Guess whether the dealt number's cycle is short or long, and score it.
    Guess {
        /// The number dealt by `play`.
        number: String,

        /// Your call.
        #[arg(value_enum)]
        guess: GuessArg,
    },

    /// Show the running score.
    Score,

    /// Zero the score, streak, and round count.
    Reset,
}

/// CLI-facing guess, mapped to the domain `Guess`.
#[derive(Debug, Clone, ValueEnum)]
pub enum GuessArg {
    /// Cycle length of 5 or less.
    Short,
    /// Cycle length above 5.
    Long,
}

impl GuessArg {
    fn to_domain(&self) -> Guess {
        match self {
            Self::Short => Guess::Short,
            Self::Long => Guess::Long,
        }
    }
}

pub(super) fn run<S: ScoreStore>(store: &S, command: GameCommand) -> Result<(), String> {
    match command {
        GameCommand::Play => {
            let number = game::pick_number(Uuid::new_v4().as_u128());
            let mut board = load(store)?;
            board.deal(number);
            store
                .save_scoreboard(&board)
                .map_err(|e| format!("failed to save round: {e}"))?;

            println!("{number}");
            eprintln!(
                "Short (cycle ≤ {SHORT_CYCLE_MAX}) or long? Answer with: cycles game guess {number} short|long"
            );
            Ok(())
        }
        GameCommand::Guess { number, guess } => {
            let number = input::parse_number(&number).map_err(|e| e.to_string())?;
            let mut board = load(store)?;
            let verdict = board
                .settle(number, guess.to_domain())
                .map_err(|e| e.to_string())?;
            store
                .save_scoreboard(&board)
                .map_err(|e| format!("failed to save score: {e}"))?;

            println!("{}", format_verdict(&verdict));
            println!("{}", format_scoreboard(&board));
            Ok(())
        }
        GameCommand::Score => {
            println!("{}", format_scoreboard(&load(store)?));
            Ok(())
        }
        GameCommand::Reset => {
            store
                .save_scoreboard(&Scoreboard::default())
                .map_err(|e| format!("failed to reset score: {e}"))?;
            eprintln!("Score reset");
            Ok(())
        }
    }
}

fn load<S: ScoreStore>(store: &S) -> Result<Scoreboard, String> {
    store
        .load_scoreboard()
        .map_err(|e| format!("failed to load score: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use cycles::storage::MemoryStore;

    fn guess(number: impl Into<String>, guess: GuessArg) -> GameCommand {
        GameCommand::Guess {
            number: number.into(),
            guess,
        }
    }

    fn dealt(store: &MemoryStore) -> u64 {
        store.load_scoreboard().unwrap().pending.unwrap()
    }

    fn right_call(number: u64) -> GuessArg {
        match game::judge(number, Guess::Short).answer() {
            Guess::Short => GuessArg::Short,
            Guess::Long => GuessArg::Long,
        }
    }

    #[test]
    fn guess_without_play_is_rejected() {
        let store = MemoryStore::new();

        for _ in 0..5 {
            let err = run(&store, guess("1", GuessArg::Short)).unwrap_err();
            assert!(err.contains("no round in play"), "{err}");
        }
        assert_eq!(store.load_scoreboard().unwrap(), Scoreboard::default());
    }

    #[test]
    fn play_then_guess_scores_once() {
        let store = MemoryStore::new();
        run(&store, GameCommand::Play).unwrap();
        let number = dealt(&store);

        run(&store, guess(number.to_string(), right_call(number))).unwrap();
        let board = store.load_scoreboard().unwrap();
        assert_eq!(board.score, game::POINTS_PER_WIN);
        assert_eq!(board.rounds, 1);
        assert_eq!(board.pending, None);

        assert!(run(&store, guess(number.to_string(), right_call(number))).is_err());
        assert_eq!(store.load_scoreboard().unwrap().rounds, 1);
    }

    #[test]
    fn guess_on_another_number_is_rejected() {
        let store = MemoryStore::new();
        run(&store, GameCommand::Play).unwrap();
        let number = dealt(&store);
        let other = number + 1_000;

        let err = run(&store, guess(other.to_string(), GuessArg::Long)).unwrap_err();
        assert!(err.contains("not the number in play"), "{err}");
        assert_eq!(dealt(&store), number);
        assert_eq!(store.load_scoreboard().unwrap().rounds, 0);
    }

    #[test]
    fn reset_zeroes_the_scoreboard() {
        let store = MemoryStore::new();
        run(&store, GameCommand::Play).unwrap();
        let number = dealt(&store);
        run(&store, guess(number.to_string(), GuessArg::Short)).unwrap();
        run(&store, GameCommand::Play).unwrap();

        run(&store, GameCommand::Reset).unwrap();

        assert_eq!(store.load_scoreboard().unwrap(), Scoreboard::default());
    }

    #[test]
    fn guess_rejects_bad_numbers() {
        let store = MemoryStore::new();
        run(&store, GameCommand::Play).unwrap();

        let err = run(&store, guess("-4", GuessArg::Long)).unwrap_err();
        assert!(err.contains("-4"));
    }
}
