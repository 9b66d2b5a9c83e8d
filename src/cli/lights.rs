use clap::Subcommand;
use serde_json::{json, Value};
use tabled::Tabled;

use crate::cli::output::{print_json, print_table};
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;
use crate::models::bulb::Bulb;

use super::super::resolve;

#[derive(Subcommand)]
pub enum LightsCommand {
    /// List all bulbs in a payload
    List {
        /// Path to a /lights JSON payload, or `-` for stdin
        file: String,
    },

    /// Show a single bulb
    Get {
        /// Path to a /lights JSON payload, or `-` for stdin
        file: String,
        /// Bulb name or ID
        bulb: String,
    },
}

#[derive(Tabled)]
struct BulbRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    bulb_type: String,
    #[tabled(rename = "POWER")]
    power: String,
    #[tabled(rename = "BRI")]
    brightness: String,
    #[tabled(rename = "MODE")]
    color_mode: String,
    #[tabled(rename = "REACHABLE")]
    reachable: String,
}

impl BulbRow {
    fn from_bulb(bulb: &Bulb) -> Self {
        let state = bulb.state();
        let flag = |value: Option<bool>, yes: &str, no: &str| {
            match value {
                Some(true) => yes,
                Some(false) => no,
                None => "-",
            }
            .to_string()
        };

        Self {
            id: bulb.id().to_string(),
            name: bulb.name().unwrap_or("-").to_string(),
            bulb_type: bulb.bulb_type().unwrap_or("-").to_string(),
            power: flag(state.on(), "on", "off"),
            brightness: state
                .brightness()
                .map(|b| b.to_string())
                .unwrap_or_else(|| "-".to_string()),
            color_mode: state
                .color_mode()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".to_string()),
            reachable: flag(state.reachable(), "yes", "no"),
        }
    }
}

pub fn handle(cmd: &LightsCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    match cmd {
        LightsCommand::List { file } => handle_list(file, config),
        LightsCommand::Get { file, bulb } => handle_get(file, bulb, config),
    }
}

fn handle_list(file: &str, config: &RuntimeConfig) -> Result<(), AppError> {
    let lights = resolve::load_lights(file, &config.parse_options)?;

    if config.output_mode == OutputMode::Table {
        let rows: Vec<BulbRow> = lights.iter().map(BulbRow::from_bulb).collect();
        print_table(&rows);
    } else {
        print_json(&Value::Object(lights.data_for(config.serialize_mode)));
    }
    Ok(())
}

fn handle_get(file: &str, name_or_id: &str, config: &RuntimeConfig) -> Result<(), AppError> {
    let lights = resolve::load_lights(file, &config.parse_options)?;
    let bulb = lights.resolve(name_or_id)?;

    if config.output_mode == OutputMode::Table {
        print_table(&[BulbRow::from_bulb(bulb)]);
    } else {
        print_json(&json!({
            "id": bulb.id(),
            "bulb": Value::Object(bulb.data_for(config.serialize_mode)),
        }));
    }
    Ok(())
}
