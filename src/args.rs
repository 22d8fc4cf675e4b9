use clap::{Arg, Command};
use std::{ffi::OsString, path::PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "./conf.json";

#[derive(Debug, Clone)]
pub struct MainArgs {
    pub config_path: PathBuf,
}

pub(crate) fn build_cli_command() -> Command {
    Command::new("dbsel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Pick a saved MySQL connection and open it in mysql or mycli.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Config file path")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_CONFIG_PATH),
        )
}

pub(crate) fn parse_main_args_from<I, T>(cmd: &Command, argv: I) -> MainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().get_matches_from(argv);

    MainArgs {
        config_path: matches
            .get_one::<PathBuf>("config")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
    }
}

/// Parses command-line arguments using clap.
pub fn main_args() -> MainArgs {
    parse_main_args_from(&build_cli_command(), std::env::args_os())
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;
