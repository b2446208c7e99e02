//! Case-insensitive substring search across selected record fields.
//!
//! A record matches when any selected field contains the query after both
//! sides are lowercased. What a blank query means depends on the call site,
//! so it is an explicit [`BlankQuery`] policy rather than a hard-coded rule:
//! the listing shows everything, the quick-search dropdown shows nothing.

use crate::model::{Field, FieldSelector, ProjectRecord};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What to return when the query is empty or whitespace only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankQuery {
    /// Every record, in snapshot order.
    #[default]
    ReturnAll,
    /// No records.
    ReturnNone,
}

/// Field list plus blank-query policy for one search surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSpec {
    pub fields: Vec<Field>,
    pub blank: BlankQuery,
}

impl SearchSpec {
    /// Listing view: name, venue, status and both dates; blank shows all.
    #[must_use]
    pub fn listing() -> Self {
        Self {
            fields: Field::LISTING.to_vec(),
            blank: BlankQuery::ReturnAll,
        }
    }

    /// Quick search: name only; blank shows no suggestions.
    #[must_use]
    pub fn quick_search() -> Self {
        Self {
            fields: Field::QUICK_SEARCH.to_vec(),
            blank: BlankQuery::ReturnNone,
        }
    }

    /// Same policy, different fields.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn apply<'a>(&self, records: &'a [ProjectRecord], query: &str) -> Vec<&'a ProjectRecord> {
        filter(records, query, &self.fields, self.blank)
    }
}

/// Returns true for an empty or whitespace-only query.
#[must_use]
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Returns true if any selected field of `record` contains `needle`.
///
/// `needle` must already be lowercased.
#[must_use]
pub fn matches<S: FieldSelector>(record: &ProjectRecord, needle: &str, fields: &[S]) -> bool {
    fields
        .iter()
        .any(|field| field.select(record).to_lowercase().contains(needle))
}

/// Records matching `query` in any of `fields`, in input order.
///
/// A non-blank query is matched as typed (only lowercased), so surrounding
/// spaces are part of the needle.
#[must_use]
pub fn filter<'a, S: FieldSelector>(
    records: &'a [ProjectRecord],
    query: &str,
    fields: &[S],
    blank: BlankQuery,
) -> Vec<&'a ProjectRecord> {
    if is_blank(query) {
        return match blank {
            BlankQuery::ReturnAll => records.iter().collect(),
            BlankQuery::ReturnNone => Vec::new(),
        };
    }

    let needle = query.to_lowercase();
    let hits: Vec<&ProjectRecord> = records
        .iter()
        .filter(|record| matches(record, &needle, fields))
        .collect();

    debug!(
        query,
        fields = fields.len(),
        scanned = records.len(),
        matched = hits.len(),
        "filtered project records"
    );
    hits
}
