pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod resolve;

use cli::output::print_error;
use config::RuntimeConfig;
use error::AppError;
use log::LevelFilter;

pub use models::bulb::{Bulb, ParseOptions};
pub use models::bulb_state::{BrightnessError, BulbState, StateChange};
pub use models::lights::Lights;
pub use models::SerializeMode;

/// Install the stderr logger. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // A logger may already be installed (tests, embedding programs).
    let _ = builder.try_init();
}

pub fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig::from_cli(&cli_args);
    init_logging(config.verbose);

    match dispatch(&cli_args.command, &config) {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

fn dispatch(command: &cli::Commands, config: &RuntimeConfig) -> Result<(), AppError> {
    match command {
        cli::Commands::Lights(cmd) => cli::lights::handle(cmd, config),
        cli::Commands::State(cmd) => cli::state::handle(cmd, config),
    }
}
