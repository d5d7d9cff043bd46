//! Scoreboard storage: a single row holding the game totals as JSON.

use rusqlite::OptionalExtension;

use crate::game::Scoreboard;

use super::{Result, ScoreStore, Storage};

impl ScoreStore for Storage {
    fn load_scoreboard(&self) -> Result<Scoreboard> {
        let data: Option<String> = self
            .conn
            .query_row("SELECT data FROM scoreboard WHERE id = 1", [], |row| {
                row.get(0)
            })
            .optional()?;
        match data {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Scoreboard::default()),
        }
    }

    fn save_scoreboard(&self, scoreboard: &Scoreboard) -> Result<()> {
        let json = serde_json::to_string(scoreboard)?;
        self.conn.execute(
            "INSERT INTO scoreboard (id, data) VALUES (1, ?1)
             ON CONFLICT (id) DO UPDATE SET data = excluded.data",
            [json],
        )?;
        Ok(())
    }
}
