use clap::{Args, Subcommand};
use log::debug;
use serde_json::{json, Value};

use crate::cli::output::print_json;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::bulb_state::StateChange;
use crate::models::mode::{Alert, ColorMode, Effect};

use super::super::resolve;

#[derive(Subcommand)]
pub enum StateCommand {
    /// Apply changes to a bulb and print the resulting state payload
    Set {
        /// Path to a /lights JSON payload, or `-` for stdin
        file: String,
        /// Bulb name or ID
        bulb: String,
        #[command(flatten)]
        change: ChangeArgs,
    },

    /// Print a bulb's current state payload
    Show {
        /// Path to a /lights JSON payload, or `-` for stdin
        file: String,
        /// Bulb name or ID
        bulb: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ChangeArgs {
    /// Turn the bulb on
    #[arg(long, conflicts_with = "off")]
    pub on: bool,

    /// Turn the bulb off
    #[arg(long)]
    pub off: bool,

    /// Brightness (0-254)
    #[arg(long, allow_negative_numbers = true)]
    pub bri: Option<i64>,

    /// Hue (colour wheel position)
    #[arg(long)]
    pub hue: Option<i64>,

    /// Saturation
    #[arg(long)]
    pub sat: Option<i64>,

    /// CIE xy colour coordinates
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pub xy: Option<Vec<f64>>,

    /// Colour temperature in mired
    #[arg(long)]
    pub ct: Option<i64>,

    /// Alert effect (none, select, lselect)
    #[arg(long)]
    pub alert: Option<String>,

    /// Dynamic effect (none, colorloop)
    #[arg(long)]
    pub effect: Option<String>,

    /// Colour mode (hs, xy, ct)
    #[arg(long)]
    pub colormode: Option<String>,
}

impl ChangeArgs {
    pub fn to_change(&self) -> StateChange {
        let on = match (self.on, self.off) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        StateChange {
            on,
            bri: self.bri,
            hue: self.hue,
            sat: self.sat,
            xy: self.xy.as_deref().and_then(|xy| match xy {
                [x, y] => Some([*x, *y]),
                _ => None,
            }),
            ct: self.ct,
            alert: self.alert.as_deref().map(Alert::from_token),
            effect: self.effect.as_deref().map(Effect::from_token),
            colormode: self.colormode.as_deref().map(ColorMode::from_token),
        }
    }
}

pub fn handle(cmd: &StateCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    match cmd {
        StateCommand::Set { file, bulb, change } => {
            let change = change.to_change();
            if change.is_empty() {
                return Err(AppError::InvalidInput(
                    "no state changes given".to_string(),
                ));
            }

            let mut lights = resolve::load_lights(file, &config.parse_options)?;
            let bulb = lights.resolve_mut(bulb)?;
            debug!("applying {:?} to bulb {}", change, bulb.id());
            bulb.state_mut().apply(change)?;

            print_json(&json!({
                "id": bulb.id(),
                "state": Value::Object(bulb.state().data_for(config.serialize_mode)),
            }));
            Ok(())
        }
        StateCommand::Show { file, bulb } => {
            let lights = resolve::load_lights(file, &config.parse_options)?;
            let bulb = lights.resolve(bulb)?;
            print_json(&json!({
                "id": bulb.id(),
                "state": Value::Object(bulb.state().data_for(config.serialize_mode)),
            }));
            Ok(())
        }
    }
}
