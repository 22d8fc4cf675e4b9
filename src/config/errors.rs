use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The config file is not valid JSON/YAML for the expected layout.
    Parse { path: PathBuf, message: String },
    /// `cmd` named a client other than `mysql` or `mycli`.
    UnknownClient(String),
    /// The profile list is missing or empty.
    NoProfiles,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => write!(f, "failed to read {}: {}", path.display(), source),
            ConfigError::Parse { path, message } => write!(f, "failed to parse {}: {}", path.display(), message),
            ConfigError::UnknownClient(value) => write!(f, "cmd must be mysql or mycli, got '{}'", value),
            ConfigError::NoProfiles => write!(f, "mysql conf is empty"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}
