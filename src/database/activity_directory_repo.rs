use std::collections::HashMap;

use parking_lot::Mutex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::database::catalog_repo;
use crate::errors::CatalogError;
use crate::models::{ActivityRecord, ActivitySeedRow};

struct DirectoryEntry {
    name: String,
    record: Mutex<ActivityRecord>,
}

/// In-memory activity catalog with per-activity rosters.
///
/// The set of activities is fixed when the directory is built, so only the
/// individual records need locking. Each record has its own mutex: updates to
/// one roster serialize while other activities stay available.
pub struct ActivityDirectory {
    entries: Vec<DirectoryEntry>,
    index: HashMap<String, usize>,
}

impl std::fmt::Debug for ActivityDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityDirectory")
            .field("activities", &self.entries.len())
            .finish()
    }
}

impl ActivityDirectory {
    pub fn from_seed(seed: Vec<ActivitySeedRow>) -> Result<Self, CatalogError> {
        catalog_repo::validate_catalog(&seed)?;

        let entries: Vec<DirectoryEntry> = seed
            .into_iter()
            .map(|row| DirectoryEntry {
                name: row.name,
                record: Mutex::new(row.record),
            })
            .collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();

        Ok(Self { entries, index })
    }

    /// Directory seeded from the catalog compiled into the binary.
    pub fn with_embedded_catalog() -> Result<Self, CatalogError> {
        Self::from_seed(catalog_repo::embedded_catalog()?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<ActivityRecord> {
        self.entry(name).map(|e| e.record.lock().clone())
    }

    /// Runs `f` against the named record while holding its lock.
    /// Returns `None` when no such activity exists.
    pub fn update<R>(&self, name: &str, f: impl FnOnce(&mut ActivityRecord) -> R) -> Option<R> {
        let entry = self.entry(name)?;
        let mut record = entry.record.lock();
        Some(f(&mut record))
    }

    /// Copies every activity in catalog order.
    pub fn snapshot(&self) -> DirectorySnapshot {
        DirectorySnapshot(
            self.entries
                .iter()
                .map(|e| (e.name.clone(), e.record.lock().clone()))
                .collect(),
        )
    }

    fn entry(&self, name: &str) -> Option<&DirectoryEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }
}

/// Point-in-time copy of the directory, serialized as a JSON object keyed by
/// activity name in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot(Vec<(String, ActivityRecord)>);

impl DirectorySnapshot {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityRecord)> {
        self.0.iter().map(|(n, r)| (n.as_str(), r))
    }
}

impl Serialize for DirectorySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, record) in &self.0 {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
