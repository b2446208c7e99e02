//! Single-record lookup for the detail view.

use crate::model::ProjectRecord;
use crate::store::{self, LoadState, RecordStore};

/// Look up `id` in `records`; the first match wins.
#[must_use]
pub fn resolve<'a>(records: &'a [ProjectRecord], id: &str) -> Option<&'a ProjectRecord> {
    store::find_by_id(records, id)
}

/// What the detail view should draw for a route id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail<'a> {
    /// Data has not arrived yet.
    Loading,
    /// Data arrived (or failed to) and holds no such id.
    NotFound,
    Found(&'a ProjectRecord),
}

impl<'a> Detail<'a> {
    #[must_use]
    pub const fn record(self) -> Option<&'a ProjectRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::Loading | Self::NotFound => None,
        }
    }
}

/// Resolve `id` against the store, distinguishing "still loading" from
/// "not there".
#[must_use]
pub fn resolve_detail<'a>(store: &'a RecordStore, id: &str) -> Detail<'a> {
    if matches!(store.state(), LoadState::Pending) {
        return Detail::Loading;
    }
    store.find_by_id(id).map_or(Detail::NotFound, Detail::Found)
}

#[cfg(test)]
mod tests {
    use super::{Detail, resolve, resolve_detail};
    use crate::model::ProjectRecord;
    use crate::store::RecordStore;

    #[test]
    fn resolve_hits_and_misses() {
        let records = vec![
            ProjectRecord::new("p-1", "one", "Pending"),
            ProjectRecord::new("p-2", "two", "Pending"),
        ];
        assert_eq!(resolve(&records, "p-2").unwrap().project_name, "two");
        assert!(resolve(&records, "p-3").is_none());
        assert!(resolve(&[], "p-1").is_none());
    }

    #[test]
    fn pending_store_reports_loading() {
        let store = RecordStore::new();
        assert_eq!(resolve_detail(&store, "p-1"), Detail::Loading);
    }

    #[test]
    fn loaded_store_reports_found_or_not_found() {
        let store = RecordStore::from_records(vec![ProjectRecord::new("p-1", "one", "Pending")]);
        assert_eq!(
            resolve_detail(&store, "p-1").record().map(|r| r.project_name.as_str()),
            Some("one")
        );
        assert_eq!(resolve_detail(&store, "nope"), Detail::NotFound);
    }

    #[test]
    fn failed_store_reports_not_found() {
        let mut store = RecordStore::new();
        store.load_failed("missing file");
        assert_eq!(resolve_detail(&store, "p-1"), Detail::NotFound);
    }
}
