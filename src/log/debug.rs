//! Debug logging implementation
//!
//! Provides file-based logging for debug, info, warn, and error messages.
//! Logs are written to `~/.dbsel/logs/dbsel.log` with timestamps and log levels.
//! Writes happen synchronously on the calling thread.

use super::{LogError, LogLevel, formatter};
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

#[cfg(unix)]
const PRIVATE_LOG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_LOG_FILE_MODE: u32 = 0o600;

/// Debug logger that writes formatted log messages to a file
pub(super) struct DebugLogger {
    /// Explicit target file; `None` means the default location under the home directory
    log_path: Option<PathBuf>,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl Default for DebugLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugLogger {
    // Construction.
    pub(super) fn new() -> Self {
        Self {
            log_path: None,
            writer: Mutex::new(None),
        }
    }

    #[cfg(test)]
    pub(super) fn with_path(path: PathBuf) -> Self {
        Self {
            log_path: Some(path),
            writer: Mutex::new(None),
        }
    }

    // Log writing.
    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let mut writer_guard = self.lock_writer();
        if writer_guard.is_none() {
            *writer_guard = Some(BufWriter::new(self.create_log_file()?));
        }

        let formatted = formatter::format_record(level, message);
        if let Some(writer) = writer_guard.as_mut() {
            writer.write_all(formatted.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        Ok(())
    }

    // Force-flush buffered log output.
    pub(super) fn flush(&self) -> Result<(), LogError> {
        if let Some(writer) = self.lock_writer().as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    fn lock_writer(&self) -> MutexGuard<'_, Option<BufWriter<File>>> {
        match self.writer.lock() {
            Ok(writer_guard) => writer_guard,
            Err(poisoned) => {
                eprintln!("Debug log writer lock poisoned; continuing with recovered state");
                poisoned.into_inner()
            }
        }
    }

    // File path and file creation helpers.
    fn create_log_file(&self) -> Result<File, LogError> {
        let log_path = match &self.log_path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                    create_private_directory(parent)?;
                }
                path.clone()
            }
            None => Self::get_debug_log_path()?,
        };
        open_private_append_file(&log_path)
    }

    fn get_debug_log_path() -> Result<PathBuf, LogError> {
        let home_dir = dirs::home_dir().ok_or_else(|| LogError::DirectoryCreationError("Home directory not found".to_string()))?;

        let log_dir = home_dir.join(".dbsel").join("logs");

        // Create directory structure if it doesn't exist
        create_private_directory(&log_dir)?;

        Ok(log_dir.join("dbsel.log"))
    }
}

fn create_private_directory(path: &Path) -> Result<(), LogError> {
    fs::create_dir_all(path)?;
    set_private_directory_permissions(path)
}

fn open_private_append_file(path: &Path) -> Result<File, LogError> {
    let mut options = OpenOptions::new();
    options
        .create(true) // Create if missing.
        .append(true); // Preserve existing logs.
    #[cfg(unix)]
    {
        options.mode(PRIVATE_LOG_FILE_MODE);
    }
    let file = options.open(path)?;
    set_private_file_permissions(path)?;
    Ok(file)
}

#[cfg(unix)]
fn set_private_directory_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_DIR_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_directory_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(unix)]
fn set_private_file_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_FILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_file_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
