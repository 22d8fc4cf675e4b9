//! Locating the `mysql` / `mycli` binaries.
//!
//! Only successful lookups are remembered. A client that is missing or fails a
//! permission check is looked up again on the next launch, so installing it
//! while the selector is open is picked up without a restart.

use crate::config::ClientKind;
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    env,
    error::Error,
    ffi::OsString,
    fmt, fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// Resolver backed by the process `PATH`, shared by every launch.
pub(crate) static CLIENT_RESOLVER: Lazy<ClientResolver> = Lazy::new(ClientResolver::from_env);

/// Why a client binary cannot be used. The program name is left to the caller.
#[derive(Debug)]
pub enum ClientPathError {
    NotFound,
    Inaccessible { path: PathBuf, source: io::Error },
    NotAFile(PathBuf),
    NotExecutable(PathBuf),
    WorldWritable(PathBuf),
    ForeignOwner(PathBuf),
}

impl fmt::Display for ClientPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientPathError::NotFound => f.write_str("not found in PATH"),
            ClientPathError::Inaccessible { path, source } => write!(f, "cannot inspect '{}': {}", path.display(), source),
            ClientPathError::NotAFile(path) => write!(f, "'{}' is not a regular file", path.display()),
            ClientPathError::NotExecutable(path) => write!(f, "'{}' is not executable", path.display()),
            ClientPathError::WorldWritable(path) => write!(f, "'{}' is world-writable", path.display()),
            ClientPathError::ForeignOwner(path) => write!(f, "'{}' is owned by neither root nor the current user", path.display()),
        }
    }
}

impl Error for ClientPathError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientPathError::Inaccessible { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub(crate) struct ClientResolver {
    /// `None` reads `PATH` at every lookup.
    search_path: Option<OsString>,
    found: Mutex<HashMap<ClientKind, PathBuf>>,
}

impl ClientResolver {
    pub(crate) fn from_env() -> Self {
        Self {
            search_path: None,
            found: Mutex::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
            found: Mutex::default(),
        }
    }

    /// Canonical, validated path of the binary for `kind`.
    pub(crate) fn resolve(&self, kind: ClientKind) -> Result<PathBuf, ClientPathError> {
        if let Some(path) = self.remembered(kind) {
            return Ok(path);
        }

        let path = self.locate(kind)?;
        if let Ok(mut found) = self.found.lock() {
            found.insert(kind, path.clone());
        }
        Ok(path)
    }

    /// Drop a remembered path, e.g. after the binary vanished under us.
    pub(crate) fn forget(&self, kind: ClientKind) {
        if let Ok(mut found) = self.found.lock() {
            found.remove(&kind);
        }
    }

    fn remembered(&self, kind: ClientKind) -> Option<PathBuf> {
        self.found.lock().ok()?.get(&kind).cloned()
    }

    fn locate(&self, kind: ClientKind) -> Result<PathBuf, ClientPathError> {
        let search_path = self.search_path.clone().or_else(|| env::var_os("PATH"));
        let located = which::which_in(kind.program(), search_path, Path::new(".")).map_err(|_| ClientPathError::NotFound)?;
        check_client_binary(&located)
    }
}

fn check_client_binary(located: &Path) -> Result<PathBuf, ClientPathError> {
    let inaccessible = |source: io::Error| ClientPathError::Inaccessible {
        path: located.to_path_buf(),
        source,
    };
    let path = fs::canonicalize(located).map_err(inaccessible)?;
    let metadata = fs::metadata(&path).map_err(inaccessible)?;

    if !metadata.is_file() {
        return Err(ClientPathError::NotAFile(path));
    }

    #[cfg(unix)]
    check_unix_permissions(&path, &metadata)?;

    Ok(path)
}

/// Refuse binaries another local user could have swapped out.
#[cfg(unix)]
fn check_unix_permissions(path: &Path, metadata: &fs::Metadata) -> Result<(), ClientPathError> {
    let mode = metadata.mode();
    let owner = metadata.uid();

    if mode & 0o111 == 0 {
        return Err(ClientPathError::NotExecutable(path.to_path_buf()));
    }
    if mode & 0o002 != 0 {
        return Err(ClientPathError::WorldWritable(path.to_path_buf()));
    }
    if owner != 0 && owner != nix::unistd::Uid::effective().as_raw() {
        return Err(ClientPathError::ForeignOwner(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "test/command_path.rs"]
mod tests;
