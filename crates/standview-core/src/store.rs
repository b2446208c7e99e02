//! Session snapshot of project records.
//!
//! The store is filled once per session, either with the records the loader
//! delivered or, when loading failed, with nothing. Every derived view reads
//! it through [`RecordStore::all`] and never mutates it.

use crate::model::ProjectRecord;
use std::collections::HashSet;
use tracing::{info, warn};

/// Where the session is in its one-shot data load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No "data available" or "data failed" event yet.
    #[default]
    Pending,
    /// Records were delivered (possibly zero of them).
    Ready,
    /// The loader reported a failure; the snapshot is empty.
    Failed(String),
}

/// Immutable, order-preserving record snapshot.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ProjectRecord>,
    state: LoadState,
}

impl RecordStore {
    /// Empty store waiting for its first load.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already holding `records`.
    #[must_use]
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        let mut store = Self::new();
        store.load(records);
        store
    }

    /// Replace the snapshot with `records`, keeping their order.
    ///
    /// Duplicate ids are a data-quality problem, not an error: they are
    /// logged and lookups return the first occurrence.
    pub fn load(&mut self, records: Vec<ProjectRecord>) {
        let duplicates = duplicate_ids(&records);
        if !duplicates.is_empty() {
            warn!(
                count = duplicates.len(),
                ids = ?duplicates,
                "snapshot contains duplicate project ids; lookups use the first occurrence"
            );
        }
        info!(records = records.len(), "project snapshot loaded");
        self.records = records;
        self.state = LoadState::Ready;
    }

    /// Record a load failure. The snapshot becomes empty so every derived
    /// view degrades to zero counts and empty lists.
    pub fn load_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(%reason, "project snapshot unavailable; continuing with an empty collection");
        self.records.clear();
        self.state = LoadState::Failed(reason);
    }

    /// All records in load order.
    #[must_use]
    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// First record whose `project_id` equals `id`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&ProjectRecord> {
        find_by_id(&self.records, id)
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Linear scan for the first record with the given id.
#[must_use]
pub fn find_by_id<'a>(records: &'a [ProjectRecord], id: &str) -> Option<&'a ProjectRecord> {
    records.iter().find(|record| record.project_id == id)
}

fn duplicate_ids(records: &[ProjectRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for record in records {
        let id = record.project_id.as_str();
        if !seen.insert(id) && !dupes.contains(&id) {
            dupes.push(id);
        }
    }
    dupes
}
