//! Outbound adapters implementing domain ports.
//!
//! - **reference_data**: loads the university dataset, either the embedded
//!   copy or a JSON file chosen at startup.

pub mod reference_data;

pub use reference_data::{
    EmbeddedUniversitySource, FileUniversitySource, load_catalogue, reference_catalogue,
};
