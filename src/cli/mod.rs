pub mod lights;
pub mod output;
pub mod state;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "huebulb",
    version,
    about = "Inspect and edit bulb records from a lighting bridge's /lights payload"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable table instead of JSON
    #[arg(short = 't', long = "table", global = true)]
    pub table: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Keep `false` and `0` fields when serializing
    #[arg(long, global = true, env = "HUEBULB_STRICT")]
    pub strict: bool,

    /// Read firmware version from the `type` key, like older clients did
    #[arg(long, global = true, env = "HUEBULB_LEGACY_SWVERSION")]
    pub legacy_swversion: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect bulbs
    #[command(subcommand)]
    Lights(lights::LightsCommand),

    /// Edit bulb state
    #[command(subcommand)]
    State(state::StateCommand),
}
