//! Dataset container and JSON loading.
//!
//! The dataset is a versioned JSON document holding an ordered array of
//! university records. Array order is significant: the backend uses it as
//! the stable tie-break order for every listing.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::error::DatasetError;
use crate::seed::UniversitySeed;
use crate::validation::record_issue;

/// Dataset format version understood by this crate.
pub const SUPPORTED_VERSION: u32 = 1;

const EMBEDDED_DATASET: &str = include_str!("../data/universities.json");

/// A validated, ordered collection of university seeds.
///
/// # Example
///
/// ```
/// use university_data::ReferenceDataset;
///
/// let json = r#"{
///     "version": 1,
///     "universities": [{
///         "id": 1, "name": "University of Toronto", "country": "Canada",
///         "city": "Toronto", "tuitionFee": 45000, "ranking": 34,
///         "establishedYear": 1827, "scholarshipAvailable": true,
///         "ieltsRequirement": 6.5
///     }]
/// }"#;
///
/// let dataset = ReferenceDataset::from_json(json).expect("valid dataset");
/// assert_eq!(dataset.universities().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDataset {
    version: u32,
    universities: Vec<UniversitySeed>,
}

impl ReferenceDataset {
    /// Parses and validates the dataset compiled into this crate.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the embedded JSON fails validation.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - The JSON is malformed or has unknown record fields
    /// - The version is unsupported
    /// - The record array is empty
    /// - Any record violates a field constraint
    /// - Two records share an identifier
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Utf8Path) -> Result<Self, DatasetError> {
        let file_name = path.file_name().ok_or_else(|| DatasetError::IoError {
            path: path.to_owned(),
            message: "path does not name a file".to_owned(),
        })?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };

        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(path, &e))?;
        let contents = dir.read_to_string(file_name).map_err(|e| io_error(path, &e))?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.universities.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::with_capacity(raw.universities.len());
        for (index, seed) in raw.universities.iter().enumerate() {
            if let Some(reason) = record_issue(seed) {
                return Err(DatasetError::InvalidRecord {
                    index,
                    id: seed.id,
                    reason: reason.to_owned(),
                });
            }
            if !seen.insert(seed.id) {
                return Err(DatasetError::DuplicateId { index, id: seed.id });
            }
        }

        Ok(Self {
            version: raw.version,
            universities: raw.universities,
        })
    }

    /// Returns the dataset version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the records in dataset order.
    #[must_use]
    pub fn universities(&self) -> &[UniversitySeed] {
        &self.universities
    }

    /// Consumes the dataset, yielding the records in dataset order.
    #[must_use]
    pub fn into_universities(self) -> Vec<UniversitySeed> {
        self.universities
    }
}

fn io_error(path: &Utf8Path, err: &std::io::Error) -> DatasetError {
    DatasetError::IoError {
        path: path.to_owned(),
        message: err.to_string(),
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    version: u32,
    universities: Vec<UniversitySeed>,
}
