//! Record storage: the `SQLite` implementation of [`RecordStore`].

use rusqlite::{OptionalExtension, Row};
use uuid::Uuid;

use crate::model::{Power, Record, Shelf};

use super::{RecordStore, Result, Storage, StorageError};

/// Raw column values of one `records` row, before validation.
type RawRecord = (String, String, u32, String, String);

impl RecordStore for Storage {
    fn list(&self, shelf: Shelf) -> Result<Vec<Record>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, input_number, power, result, added_at FROM records
             WHERE shelf = ?1 ORDER BY seq DESC",
        )?;
        let rows = stmt.query_map([shelf.as_str()], read_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(decode_record(row?)?);
        }
        Ok(records)
    }

    fn get(&self, shelf: Shelf, id: Uuid) -> Result<Record> {
        let raw = self
            .conn
            .query_row(
                "SELECT id, input_number, power, result, added_at FROM records
                 WHERE shelf = ?1 AND id = ?2",
                rusqlite::params![shelf.as_str(), id.to_string()],
                read_row,
            )
            .optional()?;
        match raw {
            Some(raw) => decode_record(raw),
            None => Err(StorageError::RecordNotFound(id)),
        }
    }

    fn put(&self, shelf: Shelf, record: &Record) -> Result<()> {
        let result = serde_json::to_string(&record.result)?;
        let tx = self.conn.unchecked_transaction()?;
        // Delete-then-insert gives a replaced record a fresh, most recent `seq`.
        tx.execute(
            "DELETE FROM records WHERE shelf = ?1 AND id = ?2",
            rusqlite::params![shelf.as_str(), record.id.to_string()],
        )?;
        tx.execute(
            "INSERT INTO records (id, shelf, input_number, power, result, added_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                record.id.to_string(),
                shelf.as_str(),
                record.input_number.to_string(),
                record.power.get(),
                result,
                record.added_at.to_string(),
            ],
        )?;
        tx.commit()?;
        tracing::debug!(%shelf, id = %record.id, input = record.input_number, "stored record");
        Ok(())
    }

    fn delete(&self, shelf: Shelf, id: Uuid) -> Result<()> {
        let rows = self.conn.execute(
            "DELETE FROM records WHERE shelf = ?1 AND id = ?2",
            rusqlite::params![shelf.as_str(), id.to_string()],
        )?;
        if rows == 0 {
            return Err(StorageError::RecordNotFound(id));
        }
        tracing::debug!(%shelf, %id, "deleted record");
        Ok(())
    }

    fn clear(&self, shelf: Shelf) -> Result<usize> {
        let rows = self
            .conn
            .execute("DELETE FROM records WHERE shelf = ?1", [shelf.as_str()])?;
        tracing::debug!(%shelf, rows, "cleared shelf");
        Ok(rows)
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawRecord> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

/// Validates raw column values into a [`Record`].
fn decode_record(
    (id_str, input_str, power_raw, result_json, added_at_str): RawRecord,
) -> Result<Record> {
    let id = id_str
        .parse::<Uuid>()
        .map_err(|e| StorageError::Corrupt(format!("invalid record id: {e}")))?;
    let input_number = input_str
        .parse::<u64>()
        .map_err(|e| StorageError::Corrupt(format!("invalid input number: {e}")))?;
    let power = Power::new(power_raw)
        .map_err(|e| StorageError::Corrupt(format!("invalid power: {e}")))?;
    let result = serde_json::from_str(&result_json)?;
    let added_at = added_at_str
        .parse::<jiff::Timestamp>()
        .map_err(|e| StorageError::Corrupt(format!("invalid added_at: {e}")))?;

    Ok(Record {
        id,
        input_number,
        power,
        result,
        added_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;
    use tempfile::TempDir;

    use crate::cycle;

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("cycles")).unwrap();
        (dir, storage)
    }

    fn sample_record(n: u64) -> Record {
        Record::new(n, Power::SQUARE, cycle::compute(n, Power::SQUARE))
    }

    #[test]
    fn put_and_get_record() {
        let (_dir, storage) = test_storage();
        let record = sample_record(19);

        storage.put(Shelf::History, &record).unwrap();
        let loaded = storage.get(Shelf::History, record.id).unwrap();

        assert_eq!(loaded, record);
    }

    #[test]
    fn list_is_most_recent_first() {
        let (_dir, storage) = test_storage();

        for n in [1, 2, 3] {
            storage.put(Shelf::History, &sample_record(n)).unwrap();
        }

        let inputs: Vec<u64> = storage
            .list(Shelf::History)
            .unwrap()
            .iter()
            .map(|r| r.input_number)
            .collect();
        assert_eq!(inputs, vec![3, 2, 1]);
    }

    #[test]
    fn put_same_id_replaces_and_moves_to_front() {
        let (_dir, storage) = test_storage();
        let mut first = sample_record(1);
        storage.put(Shelf::History, &first).unwrap();
        storage.put(Shelf::History, &sample_record(2)).unwrap();

        first.added_at = Timestamp::new(2_000_000_000, 0).unwrap();
        storage.put(Shelf::History, &first).unwrap();

        let records = storage.list(Shelf::History).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, first.id);
        assert_eq!(records[0].added_at, first.added_at);
    }

    #[test]
    fn shelves_are_independent() {
        let (_dir, storage) = test_storage();
        let record = sample_record(7);

        storage.put(Shelf::Favorites, &record).unwrap();

        assert!(storage.list(Shelf::History).unwrap().is_empty());
        let err = storage.get(Shelf::History, record.id).unwrap_err();
        assert!(matches!(err, StorageError::RecordNotFound(_)));
    }

    #[test]
    fn large_input_numbers_round_trip() {
        let (_dir, storage) = test_storage();
        let record = sample_record(u64::MAX);

        storage.put(Shelf::History, &record).unwrap();

        let loaded = storage.get(Shelf::History, record.id).unwrap();
        assert_eq!(loaded.input_number, u64::MAX);
    }

    #[test]
    fn delete_record() {
        let (_dir, storage) = test_storage();
        let record = sample_record(19);
        storage.put(Shelf::History, &record).unwrap();

        storage.delete(Shelf::History, record.id).unwrap();

        assert!(storage.list(Shelf::History).unwrap().is_empty());
    }

    #[test]
    fn delete_nonexistent_record_fails() {
        let (_dir, storage) = test_storage();
        let err = storage.delete(Shelf::History, Uuid::new_v4()).unwrap_err();

        assert!(matches!(err, StorageError::RecordNotFound(_)));
    }

    #[test]
    fn clear_counts_removed_records() {
        let (_dir, storage) = test_storage();
        storage.put(Shelf::History, &sample_record(1)).unwrap();
        storage.put(Shelf::History, &sample_record(2)).unwrap();
        storage.put(Shelf::Favorites, &sample_record(3)).unwrap();

        assert_eq!(storage.clear(Shelf::History).unwrap(), 2);
        assert_eq!(storage.clear(Shelf::History).unwrap(), 0);
        assert_eq!(storage.list(Shelf::Favorites).unwrap().len(), 1);
    }

    #[test]
    fn corrupt_row_is_reported() {
        let (_dir, storage) = test_storage();
        storage
            .conn
            .execute(
                "INSERT INTO records (id, shelf, input_number, power, result, added_at)
                 VALUES ('not-a-uuid', 'history', '1', 2, '{}', 'now')",
                [],
            )
            .unwrap();

        let err = storage.list(Shelf::History).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}
