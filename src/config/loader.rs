//! Configuration file loading
//!
//! Handles:
//! - Reading the config file named on the command line
//! - Parsing JSON (default) or YAML (`.yaml`/`.yml`)
//! - Validating the client kind and the profile list

use super::{ClientKind, ConfigError, ConnectionProfile, ProfileStore};
use crate::{log_debug, log_info, log_warn};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    cmd: Option<String>,
    #[serde(default)]
    debug_mode: bool,
    #[serde(default)]
    mysql: Vec<RawProfile>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(default)]
    host: String,
    #[serde(default)]
    port: u16,
    #[serde(default)]
    user: String,
    #[serde(default)]
    pwd: String,
    #[serde(default)]
    database: String,
}

impl From<RawProfile> for ConnectionProfile {
    fn from(raw: RawProfile) -> Self {
        ConnectionProfile::new(raw.host, raw.port, raw.user, raw.pwd, raw.database)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Settings that affect the program rather than the profile list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub debug_mode: bool,
}

/// Result of a successful load.
#[derive(Debug)]
pub struct LoadedConfig {
    pub store: ProfileStore,
    pub settings: Settings,
}

pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self { config_path: config_path.into() }
    }

    /// Load the profile store from the config file
    pub fn load(self) -> Result<LoadedConfig, ConfigError> {
        log_info!("Loading configuration from: {:?}", self.config_path);

        let content = fs::read_to_string(&self.config_path).map_err(|source| {
            log_warn!("Failed to read config file: {}", source);
            ConfigError::Read {
                path: self.config_path.clone(),
                source,
            }
        })?;

        parse_config(&content, &self.config_path)
    }
}

fn parse_config(content: &str, path: &Path) -> Result<LoadedConfig, ConfigError> {
    let raw = match ConfigFormat::from_path(path) {
        ConfigFormat::Json => serde_json::from_str::<RawConfig>(content).map_err(|err| err.to_string()),
        ConfigFormat::Yaml => serde_yml::from_str::<RawConfig>(content).map_err(|err| err.to_string()),
    }
    .map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    let client = ClientKind::from_config_value(raw.cmd.as_deref())?;
    let profiles: Vec<ConnectionProfile> = raw.mysql.into_iter().map(ConnectionProfile::from).collect();
    let store = ProfileStore::new(client, profiles)?;
    log_debug!("Parsed {} profile(s) for client {}", store.len(), client);

    Ok(LoadedConfig {
        store,
        settings: Settings { debug_mode: raw.debug_mode },
    })
}

#[cfg(test)]
#[path = "../test/config/loader.rs"]
mod tests;
