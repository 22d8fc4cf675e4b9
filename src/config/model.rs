//! Connection profile domain models.

use super::ConfigError;
use secrecy::SecretString;
use std::fmt;

/// Which interactive client is launched for a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClientKind {
    /// The stock `mysql` client.
    #[default]
    Mysql,
    /// `mycli`, the auto-completing alternative.
    Mycli,
}

impl ClientKind {
    /// Resolve the `cmd` config value. Missing or empty means `mysql`.
    pub fn from_config_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            None | Some("") | Some("mysql") => Ok(ClientKind::Mysql),
            Some("mycli") => Ok(ClientKind::Mycli),
            Some(other) => Err(ConfigError::UnknownClient(other.to_string())),
        }
    }

    /// Binary name looked up on `PATH`.
    pub fn program(self) -> &'static str {
        match self {
            ClientKind::Mysql => "mysql",
            ClientKind::Mycli => "mycli",
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// A single saved database connection.
#[derive(Debug)]
pub struct ConnectionProfile {
    /// Hostname or IP address.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Login user.
    pub user: String,
    /// Login password, only exposed when the client command line is built.
    pub password: SecretString,
    /// Default schema to open.
    pub database: String,
}

impl ConnectionProfile {
    pub fn new(host: impl Into<String>, port: u16, user: impl Into<String>, password: impl Into<String>, database: impl Into<String>) -> Self {
        let password: String = password.into();
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: SecretString::from(password),
            database: database.into(),
        }
    }

    /// List label, `<host>/<database>`.
    pub fn display_name(&self) -> String {
        format!("{}/{}", self.host, self.database)
    }
}

/// Ordered, non-empty profile list plus the configured client.
#[derive(Debug)]
pub struct ProfileStore {
    client: ClientKind,
    profiles: Vec<ConnectionProfile>,
}

impl ProfileStore {
    pub fn new(client: ClientKind, profiles: Vec<ConnectionProfile>) -> Result<Self, ConfigError> {
        if profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }
        Ok(Self { client, profiles })
    }

    pub fn client(&self) -> ClientKind {
        self.client
    }

    pub fn profiles(&self) -> &[ConnectionProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Never true for a store built through `new`.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.profiles.len() - 1
    }
}

#[cfg(test)]
#[path = "../test/config/model.rs"]
mod tests;
