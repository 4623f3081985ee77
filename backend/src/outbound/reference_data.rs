//! Reference-data adapter loading universities from the dataset crate.
//!
//! Two sources are provided: the copy embedded in `university-data` and a
//! JSON file on disk selected through configuration. Both convert raw seeds
//! into validated domain records.

use std::sync::OnceLock;

use camino::Utf8PathBuf;
use tracing::{debug, info};
use university_data::{ReferenceDataset, UniversitySeed};

use crate::domain::ports::{UniversitySource, UniversitySourceError};
use crate::domain::{University, UniversityCatalogue, UniversityDraft};

fn seed_to_draft(seed: UniversitySeed) -> UniversityDraft {
    UniversityDraft {
        id: seed.id,
        name: seed.name,
        country: seed.country,
        city: seed.city,
        tuition_fee: seed.tuition_fee,
        ranking: seed.ranking,
        established_year: seed.established_year,
        scholarship_available: seed.scholarship_available,
        ielts_requirement: seed.ielts_requirement,
    }
}

fn into_domain(dataset: ReferenceDataset) -> Result<Vec<University>, UniversitySourceError> {
    dataset
        .into_universities()
        .into_iter()
        .map(|seed| {
            let id = seed.id;
            University::try_new(seed_to_draft(seed))
                .map_err(|source| UniversitySourceError::InvalidRecord { id, source })
        })
        .collect()
}

/// Source backed by the dataset compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedUniversitySource;

impl UniversitySource for EmbeddedUniversitySource {
    fn load(&self) -> Result<Vec<University>, UniversitySourceError> {
        let dataset = ReferenceDataset::embedded()
            .map_err(|err| UniversitySourceError::unavailable(err.to_string()))?;
        debug!(
            version = dataset.version(),
            records = dataset.universities().len(),
            "embedded university dataset parsed"
        );
        into_domain(dataset)
    }
}

/// Source reading a dataset JSON file from disk.
#[derive(Debug, Clone)]
pub struct FileUniversitySource {
    path: Utf8PathBuf,
}

impl FileUniversitySource {
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UniversitySource for FileUniversitySource {
    fn load(&self) -> Result<Vec<University>, UniversitySourceError> {
        let dataset = ReferenceDataset::from_file(&self.path)
            .map_err(|err| UniversitySourceError::unavailable(err.to_string()))?;
        info!(
            path = %self.path,
            records = dataset.universities().len(),
            "university dataset loaded from file"
        );
        into_domain(dataset)
    }
}

/// Load a source and assemble it into a catalogue.
pub fn load_catalogue(
    source: &dyn UniversitySource,
) -> Result<UniversityCatalogue, UniversitySourceError> {
    Ok(UniversityCatalogue::try_new(source.load()?)?)
}

static REFERENCE_CATALOGUE: OnceLock<Result<UniversityCatalogue, UniversitySourceError>> =
    OnceLock::new();

/// Process-wide catalogue built from the embedded dataset.
///
/// The dataset is parsed on first use and shared afterwards.
///
/// # Examples
/// ```
/// use university_directory::outbound::reference_catalogue;
///
/// let catalogue = reference_catalogue().expect("embedded dataset is valid");
/// assert_eq!(catalogue.len(), 30);
/// ```
pub fn reference_catalogue() -> Result<&'static UniversityCatalogue, UniversitySourceError> {
    REFERENCE_CATALOGUE
        .get_or_init(|| load_catalogue(&EmbeddedUniversitySource))
        .as_ref()
        .map_err(Clone::clone)
}
