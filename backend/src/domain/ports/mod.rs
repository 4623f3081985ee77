//! Domain ports for the hexagonal boundary.

mod university_query;
mod university_source;

pub use university_query::{FixtureUniversityQuery, UniversityQuery};
pub use university_source::{UniversitySource, UniversitySourceError};
