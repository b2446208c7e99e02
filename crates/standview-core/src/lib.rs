//! standview-core library.
//!
//! Pure derivations over an in-memory snapshot of exhibition-stand project
//! records: status counts, multi-field search, pagination and detail lookup.
//!
//! # Conventions
//!
//! - **Errors**: Library failures are [`error::StandviewError`]; config
//!   loading uses `anyhow::Result` with context.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`).
//! - **Degradation**: Nothing in here is fatal. Missing data means an empty
//!   snapshot, a missing id means `None`, a bad page means an empty page.

pub mod config;
pub mod detail;
pub mod error;
pub mod model;
pub mod page;
pub mod search;
pub mod source;
pub mod stats;
pub mod store;
pub mod view;

pub use detail::{Detail, resolve};
pub use model::{Field, FieldSelector, ProjectRecord, Status};
pub use page::{Page, PageNav, clamp_page, paginate};
pub use search::{BlankQuery, SearchSpec, filter};
pub use stats::{StatusCounts, aggregate};
pub use store::{LoadState, RecordStore};
