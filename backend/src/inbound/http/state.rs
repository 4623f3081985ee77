//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they can be tested against fixture collections without any I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureUniversityQuery, UniversityQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub universities: Arc<dyn UniversityQuery>,
}

impl HttpState {
    /// Construct state from the university query port.
    pub fn new(universities: Arc<dyn UniversityQuery>) -> Self {
        Self { universities }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureUniversityQuery))
    }
}
