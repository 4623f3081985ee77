//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `DIRECTORY_*` environment variables and an
//! optional configuration file, in OrthoConfig's usual precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Runtime settings for the directory server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// Address to bind; defaults to all interfaces.
    pub host: Option<IpAddr>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// JSON dataset to serve instead of the embedded copy.
    pub dataset_path: Option<Utf8PathBuf>,
}

impl DirectorySettings {
    /// Configured host, falling back to `0.0.0.0`.
    pub fn host(&self) -> IpAddr {
        self.host.unwrap_or(DEFAULT_HOST)
    }

    /// Configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host(), self.port())
    }

    /// Dataset override, if any.
    pub fn dataset_path(&self) -> Option<&camino::Utf8Path> {
        self.dataset_path.as_deref()
    }
}
