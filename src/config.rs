use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Medscan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Request body cap (16 MiB).
pub const MAX_REQUEST_BYTES: usize = 16 * 1024 * 1024;

/// Maximum reports accepted by one batch request.
pub const MAX_BATCH_REPORTS: usize = 50;

pub const DEFAULT_PORT: u16 = 5000;

/// Origins allowed by default (local frontend dev servers).
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:8000",
    "http://127.0.0.1:8000",
    "http://localhost:3000",
    "http://localhost:5173",
];

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "medscan_lib=info,medscan=info,tower_http=info"
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid MEDSCAN_HOST: {0}")]
    InvalidHost(String),

    #[error("Invalid MEDSCAN_PORT: {0}")]
    InvalidPort(String),
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// Read `MEDSCAN_HOST`, `MEDSCAN_PORT` and `MEDSCAN_CORS_ORIGINS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match lookup("MEDSCAN_HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?,
            None => defaults.bind_addr.ip(),
        };

        let port = match lookup("MEDSCAN_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.bind_addr.port(),
        };

        let cors_origins = match lookup("MEDSCAN_CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect(),
            None => defaults.cors_origins,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            cors_origins,
        })
    }
}
