//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use university_directory::domain::ports::UniversityQuery;

/// Everything [`super::create_server`] needs to start listening.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) universities: Arc<dyn UniversityQuery>,
}

impl ServerConfig {
    /// Configuration serving `universities` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, universities: Arc<dyn UniversityQuery>) -> Self {
        Self {
            bind_addr,
            universities,
        }
    }
}
