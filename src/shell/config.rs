use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

use crate::modules::client_config::adapters::outbound::settings_source::SettingsSource;

pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";
pub const CONFIG_CACHE_MAX_AGE: &str = "CONFIG_CACHE_MAX_AGE";
pub const UPLOAD_LIMIT_BYTES: &str = "UPLOAD_LIMIT_BYTES";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 3600;
const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServerConfigError {
    #[error("{key} must be a valid {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cache_max_age_secs: u64,
    pub upload_limit_bytes: usize,
}

impl ServerConfig {
    /// Read once at startup. The Azure identifiers are not part of this; they are read per request.
    pub fn load(source: &dyn SettingsSource) -> Result<Self, ServerConfigError> {
        let host = source
            .lookup(HOST)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or(source, PORT, "port number", DEFAULT_PORT)?;
        let cache_max_age_secs = parse_or(
            source,
            CONFIG_CACHE_MAX_AGE,
            "number of seconds",
            DEFAULT_CACHE_MAX_AGE_SECS,
        )?;
        let upload_limit_bytes = parse_or(
            source,
            UPLOAD_LIMIT_BYTES,
            "number of bytes",
            DEFAULT_UPLOAD_LIMIT_BYTES,
        )?;
        Ok(Self {
            host,
            port,
            cache_max_age_secs,
            upload_limit_bytes,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ServerConfigError::Invalid {
                key: HOST,
                expected: "IP address",
                value: self.host.clone(),
            })
    }
}

fn parse_or<T: FromStr>(
    source: &dyn SettingsSource,
    key: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ServerConfigError> {
    match source.lookup(key).filter(|v| !v.trim().is_empty()) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ServerConfigError::Invalid {
                key,
                expected,
                value,
            }),
    }
}
