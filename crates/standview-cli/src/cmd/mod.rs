pub mod find;
pub mod list;
pub mod show;
pub mod stats;

use crate::output::{CliError, OutputMode, render_error, render_warning};
use serde::Serialize;
use standview_core::SearchSpec;
use standview_core::config::ProjectConfig;
use standview_core::error::StandviewError;
use standview_core::source;
use standview_core::store::{LoadState, RecordStore};
use std::path::{Path, PathBuf};

/// Everything a read command needs: the snapshot, the search presets and
/// the project config.
pub struct Session {
    pub store: RecordStore,
    pub config: ProjectConfig,
    pub listing: SearchSpec,
    pub quick_search: SearchSpec,
    pub data_path: PathBuf,
    /// Why the snapshot is empty, when loading failed.
    pub load_error: Option<StandviewError>,
}

impl Session {
    /// Load the snapshot once for this invocation.
    ///
    /// A missing or malformed data file is not fatal: a warning is printed
    /// and the session continues with an empty snapshot. An unknown search
    /// field in the config is fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured search field does not exist.
    pub fn open(
        project_root: &Path,
        data_flag: Option<&Path>,
        config: ProjectConfig,
        output: OutputMode,
    ) -> anyhow::Result<Self> {
        let specs = config
            .listing_spec()
            .and_then(|listing| config.quick_search_spec().map(|quick| (listing, quick)));
        let (listing, quick_search) = match specs {
            Ok(specs) => specs,
            Err(err) => {
                render_error(output, &CliError::from(&err))?;
                return Err(err.into());
            }
        };

        let env_value = std::env::var("STANDVIEW_DATA").ok();
        let data_path = source::resolve_data_path(
            project_root,
            data_flag,
            env_value.as_deref(),
            config.data.path.as_deref(),
        );

        let (store, load_error) = source::open_store(&data_path);
        if let Some(ref err) = load_error {
            render_warning(output, &CliError::from(err))?;
        }

        Ok(Self {
            store,
            config,
            listing,
            quick_search,
            data_path,
            load_error,
        })
    }

    #[must_use]
    pub fn records(&self) -> &[standview_core::ProjectRecord] {
        self.store.all()
    }
}

/// Load status as reported in JSON payloads.
#[derive(Debug, Clone, Serialize)]
pub struct LoadStatus {
    pub state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&LoadState> for LoadStatus {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Pending => Self {
                state: "pending",
                reason: None,
            },
            LoadState::Ready => Self {
                state: "ready",
                reason: None,
            },
            LoadState::Failed(reason) => Self {
                state: "failed",
                reason: Some(reason.clone()),
            },
        }
    }
}
