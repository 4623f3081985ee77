//! Reference university dataset for the directory backend.
//!
//! The crate owns the raw dataset as JSON, parses it into plain seed records
//! and validates the invariants the backend relies on (unique identifiers,
//! non-empty text fields, sane numeric ranges). It has no dependency on
//! backend domain types; the backend converts seeds into its own value
//! objects at the point of use.
//!
//! # Example
//!
//! ```
//! use university_data::ReferenceDataset;
//!
//! let dataset = ReferenceDataset::embedded().expect("embedded dataset is valid");
//! assert_eq!(dataset.universities().len(), 30);
//! ```

mod dataset;
mod error;
mod seed;
mod validation;

pub use dataset::{ReferenceDataset, SUPPORTED_VERSION};
pub use error::DatasetError;
pub use seed::UniversitySeed;
pub use validation::{IELTS_MAX, IELTS_MIN};
