use serde_json::{Map, Value};

use crate::models::bulb_state::BulbState;
use crate::models::{collect_entries, SerializeMode};

/// Knobs for reading bulb records written by older clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Fill `swversion` from the `type` key instead of `swversion`.
    pub swversion_from_type: bool,
}

/// A single light exposed by the bridge.
///
/// The id is fixed at construction and never written into [`Bulb::data`];
/// bridges key their light collections by it instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Bulb {
    id: String,
    name: Option<String>,
    bulb_type: Option<String>,
    swversion: Option<String>,
    state: BulbState,
}

impl Bulb {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            bulb_type: None,
            swversion: None,
            state: BulbState::default(),
        }
    }

    pub fn from_json(id: impl Into<String>, data: &Value) -> Self {
        Self::from_json_with(id, data, &ParseOptions::default())
    }

    pub fn from_json_with(id: impl Into<String>, data: &Value, options: &ParseOptions) -> Self {
        let text = |key: &str| data.get(key).and_then(|v| v.as_str()).map(|s| s.to_string());
        let swversion_key = if options.swversion_from_type {
            "type"
        } else {
            "swversion"
        };

        Self {
            id: id.into(),
            name: text("name"),
            bulb_type: text("type"),
            swversion: text(swversion_key),
            state: BulbState::from_json(data.get("state").unwrap_or(&Value::Null)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Display name, falling back to the id.
    pub fn name_or_id(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn bulb_type(&self) -> Option<&str> {
        self.bulb_type.as_deref()
    }

    pub fn swversion(&self) -> Option<&str> {
        self.swversion.as_deref()
    }

    pub fn state(&self) -> &BulbState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BulbState {
        &mut self.state
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_bulb_type(&mut self, bulb_type: impl Into<String>) {
        self.bulb_type = Some(bulb_type.into());
    }

    pub fn set_swversion(&mut self, swversion: impl Into<String>) {
        self.swversion = Some(swversion.into());
    }

    pub fn data(&self) -> Map<String, Value> {
        self.data_for(SerializeMode::Legacy)
    }

    pub fn data_strict(&self) -> Map<String, Value> {
        self.data_for(SerializeMode::Strict)
    }

    /// Flatten into a bridge record. `state` is left out entirely when it
    /// serializes to nothing.
    pub fn data_for(&self, mode: SerializeMode) -> Map<String, Value> {
        let state = self.state.data_for(mode);
        let state = if state.is_empty() {
            None
        } else {
            Some(Value::Object(state))
        };

        collect_entries(
            [
                ("name", self.name.as_deref().map(Value::from)),
                ("type", self.bulb_type.as_deref().map(Value::from)),
                ("swversion", self.swversion.as_deref().map(Value::from)),
                ("state", state),
            ],
            mode,
        )
    }
}
