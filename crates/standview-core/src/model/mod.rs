//! Project record model and searchable field selectors.

pub mod field;
pub mod record;

pub use field::{Field, FieldSelector, ParseFieldError};
pub use record::{ProjectRecord, Status};
