use super::record::ProjectRecord;
use std::{fmt, str::FromStr};

/// A named record attribute that can take part in a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    StartDate,
    EndDate,
    Status,
    Venue,
    VenueCountry,
    VenueCity,
    VenueHallNumber,
    VenueStandNumber,
    TotalSqMtr,
}

impl Field {
    /// Fields searched by the listing view.
    pub const LISTING: [Self; 5] = [
        Self::Name,
        Self::Venue,
        Self::Status,
        Self::StartDate,
        Self::EndDate,
    ];

    /// Fields searched by the quick-search box on the detail view.
    pub const QUICK_SEARCH: [Self; 1] = [Self::Name];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Status => "status",
            Self::Venue => "venue",
            Self::VenueCountry => "venue_country",
            Self::VenueCity => "venue_city",
            Self::VenueHallNumber => "venue_hall_number",
            Self::VenueStandNumber => "venue_stand_number",
            Self::TotalSqMtr => "total_sq_mtr",
        }
    }

    /// Borrow this field's value from a record.
    #[must_use]
    pub fn value(self, record: &ProjectRecord) -> &str {
        match self {
            Self::Id => &record.project_id,
            Self::Name => &record.project_name,
            Self::StartDate => &record.start_date,
            Self::EndDate => &record.end_date,
            Self::Status => &record.status,
            Self::Venue => &record.venue,
            Self::VenueCountry => &record.venue_country,
            Self::VenueCity => &record.venue_city,
            Self::VenueHallNumber => &record.venue_hall_number,
            Self::VenueStandNumber => &record.venue_stand_number,
            Self::TotalSqMtr => &record.total_sq_mtr,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a field name in config or on the command line is unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFieldError {
    pub got: String,
}

impl fmt::Display for ParseFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid field: '{}'", self.got)
    }
}

impl std::error::Error for ParseFieldError {}

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "id" | "project_id" => Ok(Self::Id),
            "name" | "project_name" => Ok(Self::Name),
            "start_date" | "start" => Ok(Self::StartDate),
            "end_date" | "end" => Ok(Self::EndDate),
            "status" => Ok(Self::Status),
            "venue" => Ok(Self::Venue),
            "venue_country" | "country" => Ok(Self::VenueCountry),
            "venue_city" | "city" => Ok(Self::VenueCity),
            "venue_hall_number" | "hall" => Ok(Self::VenueHallNumber),
            "venue_stand_number" | "stand" => Ok(Self::VenueStandNumber),
            "total_sq_mtr" | "area" => Ok(Self::TotalSqMtr),
            _ => Err(ParseFieldError { got: s.to_string() }),
        }
    }
}

/// Anything that can pick one searchable string out of a record.
///
/// Implemented for [`Field`] and for plain accessor functions, so call sites
/// can pass either a named field list or ad-hoc accessors.
pub trait FieldSelector {
    fn select<'r>(&self, record: &'r ProjectRecord) -> &'r str;
}

impl FieldSelector for Field {
    fn select<'r>(&self, record: &'r ProjectRecord) -> &'r str {
        self.value(record)
    }
}

impl<F> FieldSelector for F
where
    F: for<'r> Fn(&'r ProjectRecord) -> &'r str,
{
    fn select<'r>(&self, record: &'r ProjectRecord) -> &'r str {
        self(record)
    }
}
