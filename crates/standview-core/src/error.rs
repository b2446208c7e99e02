use std::fmt;
use std::path::PathBuf;

/// Machine-readable error codes for scripts and agents driving `sv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    DataFileUnreadable,
    DataFileMalformed,
    RecordNotFound,
    InvalidFieldName,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::DataFileUnreadable => "E1101",
            Self::DataFileMalformed => "E1102",
            Self::RecordNotFound => "E2001",
            Self::InvalidFieldName => "E2002",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::DataFileUnreadable => "Project data file could not be read",
            Self::DataFileMalformed => "Project data file is not a JSON array",
            Self::RecordNotFound => "Project not found",
            Self::InvalidFieldName => "Unknown search field",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in .standview/config.toml and retry."),
            Self::DataFileUnreadable => {
                Some("Pass --data <PATH> or set STANDVIEW_DATA to an existing projects.json.")
            }
            Self::DataFileMalformed => {
                Some("The data file must contain a JSON array of project objects.")
            }
            Self::RecordNotFound => Some("Use `sv list` to see available project IDs."),
            Self::InvalidFieldName => Some(
                "Use one of: id, name, start_date, end_date, status, venue, venue_country, \
                 venue_city, venue_hall_number, venue_stand_number, total_sq_mtr.",
            ),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failures that can reach the edge of the library.
///
/// None of these are fatal to a session: callers degrade to an empty
/// snapshot or an "absent" result and surface the message.
#[derive(Debug, thiserror::Error)]
pub enum StandviewError {
    #[error("failed to read project data at {path}: {source}")]
    DataUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("project data at {path} is malformed: {source}")]
    DataMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("project '{project_id}' not found")]
    RecordNotFound { project_id: String },

    #[error(transparent)]
    InvalidField(#[from] crate::model::ParseFieldError),
}

impl StandviewError {
    /// The stable code for this failure.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::DataUnreadable { .. } => ErrorCode::DataFileUnreadable,
            Self::DataMalformed { .. } => ErrorCode::DataFileMalformed,
            Self::RecordNotFound { .. } => ErrorCode::RecordNotFound,
            Self::InvalidField(_) => ErrorCode::InvalidFieldName,
        }
    }

    /// Remediation text, falling back to the code's summary.
    #[must_use]
    pub fn suggestion(&self) -> String {
        let code = self.error_code();
        code.hint().unwrap_or_else(|| code.message()).to_string()
    }
}
