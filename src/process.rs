//! Client command construction and the blocking child-process run.

use crate::command_path::{CLIENT_RESOLVER, ClientPathError, ClientResolver};
use crate::config::{ClientKind, ConnectionProfile};
use crate::{log_debug, log_error, log_info};
use secrecy::ExposeSecret;
use std::{
    error::Error,
    fmt, io,
    process::{Command, ExitStatus, Stdio},
};

const REDACTED: &str = "******";

/// Failure of a launched client. Shown on the selector and never fatal.
#[derive(Debug)]
pub enum ClientError {
    /// No usable binary was found.
    Unavailable { program: &'static str, source: ClientPathError },
    /// The binary was found but could not be spawned.
    Launch { program: &'static str, source: io::Error },
    /// The client ran and exited unsuccessfully.
    Exited { program: &'static str, status: ExitStatus },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Unavailable { program, source } => write!(f, "failed to launch {}: {}", program, source),
            ClientError::Launch { program, source } => write!(f, "failed to launch {}: {}", program, source),
            ClientError::Exited { program, status } => write!(f, "{} {}", program, describe_status(status)),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::Unavailable { source, .. } => Some(source),
            ClientError::Launch { source, .. } => Some(source),
            ClientError::Exited { .. } => None,
        }
    }
}

fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with status {}", code),
        None => format!("terminated abnormally ({})", status),
    }
}

/// Fully formed client invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCommand {
    pub program: &'static str,
    pub args: Vec<String>,
    /// Index of the argument carrying the password, and the flag text it starts with.
    password_arg: (usize, &'static str),
}

impl fmt::Debug for ClientCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCommand")
            .field("program", &self.program)
            .field("args", &self.redacted_args())
            .finish()
    }
}

impl ClientCommand {
    /// Arguments with the password replaced, safe for logs.
    pub fn redacted_args(&self) -> Vec<String> {
        let (index, prefix) = self.password_arg;
        let mut args = self.args.clone();
        if let Some(arg) = args.get_mut(index) {
            *arg = format!("{prefix}{REDACTED}");
        }
        args
    }

    fn to_command(&self, program_path: &std::path::Path) -> Command {
        let mut command = Command::new(program_path);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

/// Build the command line for `kind` connecting to `profile`.
///
/// `mysql` takes the password glued to `-p`; `mycli` takes it as the next argument.
pub fn build_client_command(kind: ClientKind, profile: &ConnectionProfile) -> ClientCommand {
    let password = profile.password.expose_secret();
    let mut args = vec![
        "-h".to_string(),
        profile.host.clone(),
        "-P".to_string(),
        profile.port.to_string(),
        "-u".to_string(),
        profile.user.clone(),
    ];

    let password_arg = match kind {
        ClientKind::Mysql => {
            args.push(format!("-p{password}"));
            (args.len() - 1, "-p")
        }
        ClientKind::Mycli => {
            args.push("-p".to_string());
            args.push(password.to_string());
            (args.len() - 1, "")
        }
    };

    args.push("-D".to_string());
    args.push(profile.database.clone());

    ClientCommand {
        program: kind.program(),
        args,
        password_arg,
    }
}

/// Run the client in the foreground and wait for it to exit.
///
/// The caller must have released the terminal beforehand.
pub fn run_client(kind: ClientKind, profile: &ConnectionProfile) -> Result<(), ClientError> {
    run_client_with(&CLIENT_RESOLVER, kind, profile)
}

pub(crate) fn run_client_with(resolver: &ClientResolver, kind: ClientKind, profile: &ConnectionProfile) -> Result<(), ClientError> {
    let command = build_client_command(kind, profile);
    log_info!("Launching {} with args: {:?}", command.program, command.redacted_args());

    let program_path = resolver.resolve(kind).map_err(|source| {
        log_error!("Cannot use {}: {}", command.program, source);
        ClientError::Unavailable { program: command.program, source }
    })?;

    let status = command.to_command(&program_path).status().map_err(|source| {
        log_error!("Failed to spawn {}: {}", command.program, source);
        resolver.forget(kind);
        ClientError::Launch { program: command.program, source }
    })?;

    check_status(command.program, status)
}

fn check_status(program: &'static str, status: ExitStatus) -> Result<(), ClientError> {
    if status.success() {
        log_debug!("{} exited successfully", program);
        Ok(())
    } else {
        log_error!("{} failed with code: {:?}", program, status.code());
        Err(ClientError::Exited { program, status })
    }
}

#[cfg(test)]
#[path = "test/process.rs"]
mod tests;
