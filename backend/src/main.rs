//! University directory server entry point.

mod server;

use std::sync::Arc;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use university_directory::config::DirectorySettings;
use university_directory::domain::ports::UniversityQuery;
use university_directory::inbound::http::health::HealthState;
use university_directory::outbound::{FileUniversitySource, load_catalogue, reference_catalogue};

fn load_universities(settings: &DirectorySettings) -> std::io::Result<Arc<dyn UniversityQuery>> {
    let catalogue = match settings.dataset_path() {
        Some(path) => load_catalogue(&FileUniversitySource::new(path)),
        None => reference_catalogue().cloned(),
    }
    .map_err(|err| std::io::Error::other(format!("failed to load universities: {err}")))?;
    Ok(Arc::new(catalogue))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DirectorySettings::load()
        .map_err(|e| std::io::Error::other(format!("configuration error: {e}")))?;
    let universities = load_universities(&settings)?;

    let health_state = actix_web::web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), universities);
    let server = create_server(health_state, config)?;
    server.await
}
