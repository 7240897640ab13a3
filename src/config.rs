use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::ConfigError;
use crate::services::CapacityPolicy;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Runtime settings, read from the process environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Replaces the embedded catalog when set.
    pub seed_file: Option<PathBuf>,
    pub capacity: CapacityPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_file: None,
            capacity: CapacityPolicy::Unenforced,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: v,
            })?,
            None => defaults.port,
        };

        let capacity = match get("ENFORCE_CAPACITY") {
            Some(v) => {
                if parse_bool("ENFORCE_CAPACITY", &v)? {
                    CapacityPolicy::Enforced
                } else {
                    CapacityPolicy::Unenforced
                }
            }
            None => defaults.capacity,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            seed_file: get("ACTIVITIES_SEED_FILE").map(PathBuf::from),
            capacity,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.socket_addr_with_port(self.port)
    }

    pub fn socket_addr_with_port(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
