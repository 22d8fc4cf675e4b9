//! Connection profile configuration.

mod errors;
mod loader;
mod model;

pub use errors::ConfigError;
pub use loader::{ConfigLoader, LoadedConfig, Settings};
pub use model::{ClientKind, ConnectionProfile, ProfileStore};
