//! Shared vitals store used by the HTTP layer and the chat pipeline.
//!
//! A single SQLite connection behind a `Mutex`. Reads for the chat
//! pipeline never fail outward: any storage error degrades to default vitals.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use super::repository::{get_latest_vitals, get_user_vitals, insert_vitals};
use super::sqlite::{open_database, open_memory_database};
use super::DatabaseError;
use crate::models::{NewVitals, Vitals, VitalsRecord};
use crate::triage::VitalsProvider;

pub struct VitalsStore {
    conn: Mutex<Connection>,
}

impl VitalsStore {
    /// Open (or create) the store at `path`.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        let conn = open_database(path)?;
        tracing::info!(path = %path.display(), "Vitals store opened");
        Ok(Self::from_connection(conn))
    }

    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        Ok(Self::from_connection(open_memory_database()?))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DatabaseError> {
        self.conn.lock().map_err(|_| DatabaseError::LockPoisoned)
    }

    /// Persist a new reading and return the stored record.
    pub fn record(&self, new: NewVitals) -> Result<VitalsRecord, DatabaseError> {
        let record = VitalsRecord::from_new(new);
        insert_vitals(&*self.lock()?, &record)?;
        Ok(record)
    }

    /// A user's readings, oldest first.
    pub fn history(&self, user_id: &str) -> Result<Vec<VitalsRecord>, DatabaseError> {
        get_user_vitals(&*self.lock()?, user_id)
    }

    /// Most recent reading overall.
    pub fn latest(&self) -> Result<Option<VitalsRecord>, DatabaseError> {
        get_latest_vitals(&*self.lock()?)
    }
}

impl VitalsProvider for VitalsStore {
    fn latest_vitals(&self) -> Vitals {
        match self.latest() {
            Ok(Some(record)) => record.to_vitals(),
            Ok(None) => Vitals::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Vitals unavailable, using defaults");
                Vitals::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(user: &str, bp: Option<f64>, pulse: Option<f64>) -> NewVitals {
        NewVitals {
            user_id: user.into(),
            bp,
            pulse,
            sugar: None,
        }
    }

    #[test]
    fn empty_store_provides_defaults() {
        let store = VitalsStore::open_in_memory().unwrap();
        assert_eq!(store.latest_vitals(), Vitals::default());
    }

    #[test]
    fn latest_reading_feeds_provider() {
        let store = VitalsStore::open_in_memory().unwrap();
        store.record(reading("alice", Some(120.0), Some(70.0))).unwrap();
        store.record(reading("bob", Some(150.0), None)).unwrap();

        let v = store.latest_vitals();
        assert_eq!(v.bp, 150.0);
        assert_eq!(v.pulse, 75.0);
        assert_eq!(v.sugar, 100.0);
    }

    #[test]
    fn record_returns_stored_row() {
        let store = VitalsStore::open_in_memory().unwrap();
        let rec = store.record(reading("alice", Some(125.0), Some(88.0))).unwrap();
        let history = store.history("alice").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, rec.id);
    }

    #[test]
    fn broken_table_degrades_to_defaults() {
        let store = VitalsStore::open_in_memory().unwrap();
        store.lock().unwrap().execute_batch("DROP TABLE vitals;").unwrap();
        assert!(store.latest().is_err());
        assert_eq!(store.latest_vitals(), Vitals::default());
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("vitals.db");
        {
            let store = VitalsStore::open(&path).unwrap();
            store.record(reading("alice", Some(145.0), Some(101.0))).unwrap();
        }
        let store = VitalsStore::open(&path).unwrap();
        let v = store.latest_vitals();
        assert_eq!(v.bp, 145.0);
        assert_eq!(v.pulse, 101.0);
    }
}
