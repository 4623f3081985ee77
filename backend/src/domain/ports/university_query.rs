//! Read-side port for querying the university collection.
//!
//! Inbound adapters depend on this trait rather than on the concrete
//! catalogue, so HTTP handlers can be exercised with fixture data.

use crate::domain::{FilterQuery, University, UniversityId};

/// Port for filtering and looking up universities.
///
/// The operations are synchronous: the collection lives in memory and none of
/// them can fail.
pub trait UniversityQuery: Send + Sync {
    /// Records satisfying every criterion in `query`, sorted as requested.
    fn filter(&self, query: &FilterQuery) -> Vec<University>;

    /// Distinct country names in ascending order.
    fn unique_countries(&self) -> Vec<String>;

    /// Record with the given identifier, if any.
    fn find_by_id(&self, id: UniversityId) -> Option<University>;

    /// Number of records in the collection.
    fn count(&self) -> usize;
}

/// Fixture implementation backed by an empty collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUniversityQuery;

impl UniversityQuery for FixtureUniversityQuery {
    fn filter(&self, _query: &FilterQuery) -> Vec<University> {
        Vec::new()
    }

    fn unique_countries(&self) -> Vec<String> {
        Vec::new()
    }

    fn find_by_id(&self, _id: UniversityId) -> Option<University> {
        None
    }

    fn count(&self) -> usize {
        0
    }
}
