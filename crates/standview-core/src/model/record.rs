use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The four named status buckets.
///
/// Records keep their status as the raw string from the data file; this enum
/// only exists for aggregation and display tone. Any other string is an
/// "unknown" status and belongs to no bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "Design Submitted")]
    DesignSubmitted,
    #[serde(rename = "Admin Approved")]
    AdminApproved,
    #[serde(rename = "Project Confirmed")]
    ProjectConfirmed,
}

impl Status {
    /// All buckets, in dashboard display order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::AdminApproved,
        Self::DesignSubmitted,
        Self::ProjectConfirmed,
    ];

    /// The exact label stored in the data file.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::DesignSubmitted => "Design Submitted",
            Self::AdminApproved => "Admin Approved",
            Self::ProjectConfirmed => "Project Confirmed",
        }
    }

    /// Stable display tone for badges and progress bars.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::DesignSubmitted => "design-submitted",
            Self::AdminApproved => "admin-approved",
            Self::ProjectConfirmed => "project-confirmed",
        }
    }

    /// Classify a raw status string.
    ///
    /// The match is exact and case-sensitive: `"pending"` is not `Pending`.
    #[must_use]
    pub fn classify(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == raw)
    }

    /// Display tone for a raw status, `"default"` for unknown values.
    #[must_use]
    pub fn slug_for(raw: &str) -> &'static str {
        Self::classify(raw).map_or("default", Self::slug)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One exhibition-stand project as delivered by the data file.
///
/// Every attribute is a display string. Missing keys, `null` and non-string
/// scalars are normalised on the way in so that a sloppy data file never
/// fails to load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    #[serde(rename = "projectId", deserialize_with = "lenient_string")]
    pub project_id: String,
    #[serde(rename = "ProjectName", deserialize_with = "lenient_string")]
    pub project_name: String,
    #[serde(rename = "StartDate", deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(rename = "EndDate", deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(rename = "Status", deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(rename = "Venue", deserialize_with = "lenient_string")]
    pub venue: String,
    #[serde(rename = "VenueCountry", deserialize_with = "lenient_string")]
    pub venue_country: String,
    #[serde(rename = "VenueCity", deserialize_with = "lenient_string")]
    pub venue_city: String,
    #[serde(rename = "VenueHallNumber", deserialize_with = "lenient_string")]
    pub venue_hall_number: String,
    #[serde(rename = "VenueStandNumber", deserialize_with = "lenient_string")]
    pub venue_stand_number: String,
    #[serde(rename = "TotalSqMtr", deserialize_with = "lenient_string")]
    pub total_sq_mtr: String,
    #[serde(rename = "CompanyLogoURL", deserialize_with = "lenient_string")]
    pub company_logo_url: String,
    #[serde(rename = "DesignImageURL", deserialize_with = "lenient_string")]
    pub design_image_url: String,
}

impl ProjectRecord {
    /// Minimal record with an id, name and status; the rest stays empty.
    #[must_use]
    pub fn new(
        project_id: impl Into<String>,
        project_name: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            project_name: project_name.into(),
            status: status.into(),
            ..Self::default()
        }
    }

    /// The named bucket this record falls into, if any.
    #[must_use]
    pub fn status_bucket(&self) -> Option<Status> {
        Status::classify(&self.status)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            String::new()
        }
    })
}
