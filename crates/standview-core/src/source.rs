//! Snapshot loader for the static `projects.json` data file.
//!
//! The file is a JSON array of project objects. Field-level sloppiness is
//! absorbed by the record model; this layer only rejects files that are not
//! readable or not an array, and skips array elements that are not objects.

use crate::error::StandviewError;
use crate::model::ProjectRecord;
use crate::store::RecordStore;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default data file location, relative to the project root.
pub const DEFAULT_DATA_PATH: &str = "data/projects.json";

/// Read and parse the data file at `path`.
///
/// # Errors
///
/// Returns [`StandviewError::DataUnreadable`] if the file cannot be read and
/// [`StandviewError::DataMalformed`] if it is not a JSON array.
pub fn load_snapshot(path: &Path) -> Result<Vec<ProjectRecord>, StandviewError> {
    let bytes = std::fs::read(path).map_err(|source| StandviewError::DataUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read project data file");
    parse_snapshot(&bytes, path)
}

/// Parse data file contents. `origin` is only used in errors and logs.
///
/// # Errors
///
/// Returns [`StandviewError::DataMalformed`] if `bytes` is not a JSON array.
pub fn parse_snapshot(bytes: &[u8], origin: &Path) -> Result<Vec<ProjectRecord>, StandviewError> {
    let malformed = |source| StandviewError::DataMalformed {
        path: origin.to_path_buf(),
        source,
    };

    let items: Vec<Value> = serde_json::from_slice(bytes).map_err(malformed)?;

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            warn!(index, "skipping project entry that is not a JSON object");
            continue;
        }
        match serde_json::from_value::<ProjectRecord>(item) {
            Ok(record) => records.push(record),
            Err(err) => warn!(index, error = %err, "skipping unreadable project entry"),
        }
    }
    Ok(records)
}

/// Build the session store from `path`, degrading to an empty, failed store
/// if the file is missing or malformed.
///
/// The error is returned alongside the store so the caller can decide how
/// loudly to report it.
#[must_use]
pub fn open_store(path: &Path) -> (RecordStore, Option<StandviewError>) {
    let mut store = RecordStore::new();
    match load_snapshot(path) {
        Ok(records) => {
            store.load(records);
            (store, None)
        }
        Err(err) => {
            store.load_failed(err.to_string());
            (store, Some(err))
        }
    }
}

/// Resolve the data file path.
///
/// Precedence: explicit flag, then `STANDVIEW_DATA`, then project config,
/// then [`DEFAULT_DATA_PATH`]. Relative paths are joined onto `project_root`.
#[must_use]
pub fn resolve_data_path(
    project_root: &Path,
    flag: Option<&Path>,
    env_value: Option<&str>,
    configured: Option<&Path>,
) -> PathBuf {
    let chosen = flag
        .map(Path::to_path_buf)
        .or_else(|| {
            env_value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| configured.map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    if chosen.is_absolute() {
        chosen
    } else {
        project_root.join(chosen)
    }
}
