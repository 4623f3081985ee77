//! In-memory record store for the university collection.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::ports::UniversityQuery;
use super::{FilterQuery, University, UniversityId, filter_universities};

/// Errors raised when assembling a catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// Two records share an identifier.
    DuplicateId(UniversityId),
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate university id {id}"),
        }
    }
}

impl std::error::Error for CatalogueError {}

/// Read-only collection of universities in fixed insertion order.
///
/// Insertion order is the tie-break order for every operation. Cloning is
/// cheap; clones share the same records.
///
/// # Examples
/// ```
/// use university_directory::domain::UniversityCatalogue;
///
/// let catalogue = UniversityCatalogue::try_new(Vec::new()).expect("no duplicates");
/// assert!(catalogue.is_empty());
/// assert!(catalogue.unique_countries().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct UniversityCatalogue {
    records: Arc<[University]>,
}

impl UniversityCatalogue {
    /// Build a catalogue, rejecting duplicate identifiers.
    pub fn try_new(records: Vec<University>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(duplicate) = records.iter().find(|u| !seen.insert(u.id())) {
            return Err(CatalogueError::DuplicateId(duplicate.id()));
        }
        Ok(Self {
            records: records.into(),
        })
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[University] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record; absence is a normal outcome.
    pub fn find_by_id(&self, id: UniversityId) -> Option<&University> {
        self.records.iter().find(|u| u.id() == id)
    }

    /// Distinct country names in ascending order.
    ///
    /// Names compare case-insensitively first and by exact bytes second, so
    /// the order is total and does not depend on the host locale.
    pub fn unique_countries(&self) -> Vec<String> {
        let mut countries: Vec<String> = self
            .records
            .iter()
            .map(|u| u.country().to_owned())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        countries.sort_by(|a, b| {
            a.to_ascii_lowercase()
                .cmp(&b.to_ascii_lowercase())
                .then_with(|| a.cmp(b))
        });
        countries
    }

    /// Run the query engine over the whole collection.
    pub fn filter(&self, query: &FilterQuery) -> Vec<University> {
        filter_universities(&self.records, query)
    }
}

impl UniversityQuery for UniversityCatalogue {
    fn filter(&self, query: &FilterQuery) -> Vec<University> {
        Self::filter(self, query)
    }

    fn unique_countries(&self) -> Vec<String> {
        Self::unique_countries(self)
    }

    fn find_by_id(&self, id: UniversityId) -> Option<University> {
        Self::find_by_id(self, id).cloned()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UniversityDraft;
    use rstest::{fixture, rstest};

    fn record(id: u32, country: &str) -> University {
        University::try_new(UniversityDraft {
            id,
            name: format!("University {id}"),
            country: country.into(),
            city: "Somewhere".into(),
            tuition_fee: 10_000,
            ranking: id,
            established_year: 1900,
            scholarship_available: false,
            ielts_requirement: 6.5,
        })
        .expect("valid test record")
    }

    #[fixture]
    fn catalogue() -> UniversityCatalogue {
        UniversityCatalogue::try_new(vec![
            record(1, "USA"),
            record(2, "Canada"),
            record(3, "USA"),
            record(4, "australia"),
            record(5, "Australia"),
        ])
        .expect("unique ids")
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let result = UniversityCatalogue::try_new(vec![record(1, "UK"), record(1, "USA")]);
        assert_eq!(result.err(), Some(CatalogueError::DuplicateId(UniversityId::new(1))));
    }

    #[rstest]
    fn countries_are_unique_and_sorted(catalogue: UniversityCatalogue) {
        assert_eq!(
            catalogue.unique_countries(),
            vec!["Australia", "australia", "Canada", "USA"]
        );
    }

    #[rstest]
    #[case(3, Some("USA"))]
    #[case(99, None)]
    fn find_by_id_returns_matching_record(
        catalogue: UniversityCatalogue,
        #[case] id: u32,
        #[case] country: Option<&str>,
    ) {
        let found = catalogue.find_by_id(UniversityId::new(id));
        assert_eq!(found.map(University::country), country);
    }

    #[rstest]
    fn clones_share_records(catalogue: UniversityCatalogue) {
        let clone = catalogue.clone();
        assert!(Arc::ptr_eq(&catalogue.records, &clone.records));
    }

    #[rstest]
    fn port_delegates_to_catalogue(catalogue: UniversityCatalogue) {
        let port: &dyn UniversityQuery = &catalogue;
        assert_eq!(port.count(), 5);
        assert_eq!(port.filter(&FilterQuery::default()).len(), 5);
        assert_eq!(
            port.find_by_id(UniversityId::new(2)).map(|u| u.name().to_owned()),
            Some("University 2".to_owned())
        );
    }
}
