//! Domain types and logic for the university directory.
//!
//! Public surface:
//! - [`University`] and [`UniversityId`]: validated record value objects.
//! - [`UniversityCatalogue`]: read-only record store.
//! - [`FilterQuery`] with [`filter_universities`]: the query engine.
//! - [`compare`]: side-by-side verdicts for two records.
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failures.
//! - [`ports`]: traits adapters implement or consume.

pub mod catalogue;
pub mod comparison;
pub mod error;
pub mod filter_query;
pub mod ports;
pub mod query_engine;
pub mod trace_id;
pub mod university;

pub use self::catalogue::{CatalogueError, UniversityCatalogue};
pub use self::comparison::{UniversityComparison, compare};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::filter_query::{FilterQuery, SortKey, SortOrder, UnknownToken};
pub use self::query_engine::filter_universities;
pub use self::trace_id::TraceId;
pub use self::university::{
    IELTS_BAND_MAX, University, UniversityDraft, UniversityId, UniversityValidationError,
};

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
