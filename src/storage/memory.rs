//! In-process record store. Nothing survives the process.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use uuid::Uuid;

use crate::game::Scoreboard;
use crate::model::{Record, Shelf};

use super::{RecordStore, Result, ScoreStore, StorageError};

/// A [`RecordStore`] held in memory. Each shelf is a list, most recent first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    shelves: RefCell<HashMap<Shelf, Vec<Record>>>,
    scoreboard: Cell<Scoreboard>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn list(&self, shelf: Shelf) -> Result<Vec<Record>> {
        Ok(self
            .shelves
            .borrow()
            .get(&shelf)
            .cloned()
            .unwrap_or_default())
    }

    fn get(&self, shelf: Shelf, id: Uuid) -> Result<Record> {
        self.shelves
            .borrow()
            .get(&shelf)
            .and_then(|records| records.iter().find(|r| r.id == id))
            .cloned()
            .ok_or(StorageError::RecordNotFound(id))
    }

    fn put(&self, shelf: Shelf, record: &Record) -> Result<()> {
        let mut shelves = self.shelves.borrow_mut();
        let records = shelves.entry(shelf).or_default();
        records.retain(|r| r.id != record.id);
        records.insert(0, record.clone());
        Ok(())
    }

    fn delete(&self, shelf: Shelf, id: Uuid) -> Result<()> {
        let mut shelves = self.shelves.borrow_mut();
        let records = shelves.entry(shelf).or_default();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(StorageError::RecordNotFound(id));
        }
        Ok(())
    }

    fn clear(&self, shelf: Shelf) -> Result<usize> {
        Ok(self
            .shelves
            .borrow_mut()
            .remove(&shelf)
            .map_or(0, |records| records.len()))
    }
}

impl ScoreStore for MemoryStore {
    fn load_scoreboard(&self) -> Result<Scoreboard> {
        Ok(self.scoreboard.get())
    }

    fn save_scoreboard(&self, scoreboard: &Scoreboard) -> Result<()> {
        self.scoreboard.set(*scoreboard);
        Ok(())
    }
}
