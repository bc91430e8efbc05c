use std::process::ExitCode;

use controllermap::app::{self, StartupError};
use controllermap::cli::Cli;
use controllermap::config::{self, Options};
use controllermap::logging::{self, LogLevel};

fn main() -> ExitCode {
    // Initialize logging (early)
    logging::log_init(LogLevel::Info);

    let cli = Cli::parse_lenient(std::env::args_os());

    let options = match config::load_config().and_then(|opts| cli.merge_into_options(opts)) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("Ignoring configuration: {:#}", e);
            Options {
                dump_mappings: cli.mappings,
                ..Options::default()
            }
        }
    };
    logging::log_init(options.log_level);

    match app::run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Image failures were already reported one by one by the loader.
            if !matches!(e, StartupError::Texture(_)) {
                log::error!("{}", e);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
