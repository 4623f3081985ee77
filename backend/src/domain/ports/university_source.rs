//! Driven port for loading the university collection at startup.

use thiserror::Error;

use crate::domain::{CatalogueError, University, UniversityValidationError};

/// Errors raised while loading universities from a source.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UniversitySourceError {
    /// The underlying data could not be read or parsed.
    #[error("university source unavailable: {message}")]
    Unavailable { message: String },
    /// A record failed domain validation.
    #[error("university {id} is invalid: {source}")]
    InvalidRecord {
        id: u32,
        source: UniversityValidationError,
    },
    /// The records could not be assembled into a catalogue.
    #[error("university catalogue rejected: {0}")]
    Catalogue(#[from] CatalogueError),
}

impl UniversitySourceError {
    /// Build an [`UniversitySourceError::Unavailable`] from any message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Port for obtaining the validated collection in insertion order.
pub trait UniversitySource: Send + Sync {
    /// Load every record.
    fn load(&self) -> Result<Vec<University>, UniversitySourceError>;
}
