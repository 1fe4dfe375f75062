//! In-memory partner store
//!
//! The canonical adapter: a locked `Vec` whose insertion order is the
//! "original order" that no-op sorts and stable sorts preserve. Thin
//! JSON snapshot load/save is the only persistence; this is not a
//! storage engine.

use std::fs;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::model::PartnerRecord;
use crate::query::QuerySpec;

use super::adapter::{PartnerSource, PartnerStore};
use super::errors::{StoreError, StoreResult};

/// Partner records behind a read-write lock
#[derive(Debug)]
pub struct MemoryStore {
    records: RwLock<Vec<PartnerRecord>>,
}

impl MemoryStore {
    /// An empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// A store pre-filled with records, keeping their order
    pub fn with_records(records: Vec<PartnerRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Loads a store from a JSON snapshot file.
    ///
    /// The file must exist and hold a JSON array of records; a missing
    /// file is an I/O error so a mistyped path cannot silently become
    /// an empty directory.
    pub fn load_path(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| StoreError::Io(format!("read {}: {}", path.display(), e)))?;

        let records: Vec<PartnerRecord> =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        Ok(Self::with_records(records))
    }

    /// Writes the full record list as pretty JSON
    pub fn save_path(&self, path: &Path) -> StoreResult<()> {
        let records = self.read_guard()?;

        let json = serde_json::to_string_pretty(&*records)
            .map_err(|e| StoreError::Io(format!("serialize snapshot: {}", e)))?;

        fs::write(path, json)
            .map_err(|e| StoreError::Io(format!("write {}: {}", path.display(), e)))
    }

    /// Number of stored records
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_guard()?.len())
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_guard()?.is_empty())
    }

    fn read_guard(&self) -> StoreResult<RwLockReadGuard<'_, Vec<PartnerRecord>>> {
        self.records.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write_guard(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<PartnerRecord>>> {
        self.records.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PartnerSource for MemoryStore {
    /// Pushes the status filter down and returns the narrowed superset.
    ///
    /// Every other sub-predicate is left to the engine, which exercises
    /// the identical-results contract for partial push-down.
    fn fetch(&self, spec: &QuerySpec) -> StoreResult<Vec<PartnerRecord>> {
        let records = self.read_guard()?;

        Ok(records
            .iter()
            .filter(|record| spec.status.map_or(true, |status| record.status == status))
            .cloned()
            .collect())
    }

    fn get(&self, id: Uuid) -> StoreResult<PartnerRecord> {
        let records = self.read_guard()?;

        records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn snapshot(&self) -> StoreResult<Vec<PartnerRecord>> {
        Ok(self.read_guard()?.clone())
    }
}

impl PartnerStore for MemoryStore {
    fn insert(&self, record: PartnerRecord) -> StoreResult<()> {
        let mut records = self.write_guard()?;
        records.push(record);
        Ok(())
    }

    fn replace(&self, record: PartnerRecord) -> StoreResult<()> {
        let mut records = self.write_guard()?;

        let position = records
            .iter()
            .position(|existing| existing.id == record.id)
            .ok_or(StoreError::NotFound(record.id))?;

        records[position] = record;
        Ok(())
    }

    fn remove(&self, id: Uuid) -> StoreResult<()> {
        let mut records = self.write_guard()?;

        let position = records
            .iter()
            .position(|existing| existing.id == id)
            .ok_or(StoreError::NotFound(id))?;

        records.remove(position);
        Ok(())
    }
}
