use dbsel::{Result, args, config, log, log_debug, tui};

use std::process::ExitCode;

fn main() -> ExitCode {
    let args = args::main_args();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: args::MainArgs) -> Result<()> {
    // Configuration problems are fatal and reported before the terminal is touched
    let loaded = config::ConfigLoader::new(args.config_path).load()?;

    if loaded.settings.debug_mode {
        log::LOGGER.enable_debug();
        log::LOGGER.log_debug("Debug mode enabled")?;
    }
    log_debug!("Loaded {} profile(s), client: {}", loaded.store.len(), loaded.store.client());

    tui::run_selector(loaded.store)?;

    log::LOGGER.flush()?;
    Ok(())
}
