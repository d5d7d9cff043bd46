//! Bounded record lists: the history and favorites policy.
//!
//! A journal keeps one shelf of a [`RecordStore`] capped at `capacity`,
//! most recent first. When a new record pushes the shelf past capacity, the
//! oldest records are evicted. Favorites hold at most one record per input
//! number; history records every calculation.

use uuid::Uuid;

use crate::model::{CalculationResult, Power, Record, Shelf};

use super::{RecordStore, Result, StorageError};

/// One bounded shelf over a record store.
pub struct Journal<'a, S: RecordStore> {
    store: &'a S,
    shelf: Shelf,
    capacity: usize,
}

impl<'a, S: RecordStore> Journal<'a, S> {
    pub fn new(store: &'a S, shelf: Shelf, capacity: usize) -> Self {
        Self {
            store,
            shelf,
            capacity,
        }
    }

    pub fn shelf(&self) -> Shelf {
        self.shelf
    }

    /// Records a calculation as the most recent entry.
    ///
    /// Returns `None` without storing anything when this is the favorites
    /// shelf and `input_number` is already on it.
    pub fn add(
        &self,
        input_number: u64,
        power: Power,
        result: CalculationResult,
    ) -> Result<Option<Record>> {
        if self.shelf == Shelf::Favorites && self.contains_number(input_number)? {
            tracing::debug!(input = input_number, "already a favorite");
            return Ok(None);
        }

        let record = Record::new(input_number, power, result);
        self.store.put(self.shelf, &record)?;
        self.evict()?;
        Ok(Some(record))
    }

    /// Records on this shelf, most recent first.
    pub fn list(&self) -> Result<Vec<Record>> {
        self.store.list(self.shelf)
    }

    pub fn get(&self, id: Uuid) -> Result<Record> {
        self.store.get(self.shelf, id)
    }

    pub fn remove(&self, id: Uuid) -> Result<()> {
        self.store.delete(self.shelf, id)
    }

    /// Removes every record for `input_number`, returning how many went.
    pub fn remove_number(&self, input_number: u64) -> Result<usize> {
        let mut removed = 0;
        for record in self.list()? {
            if record.input_number == input_number {
                self.store.delete(self.shelf, record.id)?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    pub fn contains_number(&self, input_number: u64) -> Result<bool> {
        Ok(self
            .list()?
            .iter()
            .any(|r| r.input_number == input_number))
    }

    pub fn clear(&self) -> Result<usize> {
        self.store.clear(self.shelf)
    }

    /// Resolves a record reference: a full UUID or an unambiguous id prefix.
    pub fn resolve(&self, reference: &str) -> Result<Record> {
        // Try full UUID first.
        if let Ok(id) = reference.parse::<Uuid>() {
            return self.get(id);
        }

        let records = self.list()?;
        let mut matches: Vec<Record> = records
            .into_iter()
            .filter(|r| r.id.to_string().starts_with(reference))
            .collect();

        match matches.len() {
            0 => Err(StorageError::NoMatch(reference.to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(StorageError::Ambiguous {
                reference: reference.to_string(),
                matches: matches.iter().map(Record::short_id).collect(),
            }),
        }
    }

    /// Drops records past capacity, oldest first.
    fn evict(&self) -> Result<()> {
        for stale in self.list()?.iter().skip(self.capacity) {
            tracing::debug!(shelf = %self.shelf, id = %stale.id, "evicted record");
            self.store.delete(self.shelf, stale.id)?;
        }
        Ok(())
    }
}
