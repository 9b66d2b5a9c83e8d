use crate::models::bulb::ParseOptions;
use crate::models::SerializeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
    pub verbose: bool,
    pub serialize_mode: SerializeMode,
    pub parse_options: ParseOptions,
}

impl RuntimeConfig {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            output_mode: if cli.table {
                OutputMode::Table
            } else {
                OutputMode::Json
            },
            verbose: cli.verbose,
            serialize_mode: if cli.strict {
                SerializeMode::Strict
            } else {
                SerializeMode::Legacy
            },
            parse_options: ParseOptions {
                swversion_from_type: cli.legacy_swversion,
            },
        }
    }
}
