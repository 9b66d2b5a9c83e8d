use log::{debug, warn};
use serde_json::{Map, Number, Value};

use crate::models::mode::{Alert, ColorMode, Effect};
use crate::models::{collect_entries, SerializeMode};

pub const MIN_BRIGHTNESS: i64 = 0;
pub const MAX_BRIGHTNESS: i64 = 254;

/// Keys of the bridge's state object, in payload order.
pub const STATE_KEYS: [&str; 10] = [
    "on",
    "bri",
    "hue",
    "sat",
    "xy",
    "ct",
    "alert",
    "effect",
    "colormode",
    "reachable",
];

/// Why a brightness change was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BrightnessError {
    #[error("brightness value too big, no change")]
    TooBig,
    #[error("brightness value too small, no change")]
    TooSmall,
}

/// Lighting attributes of a bulb. Every field is optional; `None` means the
/// bridge did not report it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulbState {
    on: Option<bool>,
    bri: Option<i64>,
    hue: Option<i64>,
    sat: Option<i64>,
    xy: Option<[Number; 2]>,
    ct: Option<i64>,
    alert: Option<Alert>,
    effect: Option<Effect>,
    colormode: Option<ColorMode>,
    reachable: Option<bool>,
}

impl BulbState {
    /// Build from a bridge state object. `null`, non-objects and missing keys
    /// leave fields unset; values are stored without range checks.
    pub fn from_json(data: &Value) -> Self {
        if let Some(obj) = data.as_object() {
            for key in obj.keys().filter(|k| !STATE_KEYS.contains(&k.as_str())) {
                debug!("ignoring unrecognized state key '{}'", key);
            }
        }

        Self {
            on: data.get("on").and_then(|v| v.as_bool()),
            bri: data.get("bri").and_then(|v| v.as_i64()),
            hue: data.get("hue").and_then(|v| v.as_i64()),
            sat: data.get("sat").and_then(|v| v.as_i64()),
            xy: data.get("xy").and_then(xy_from_json),
            ct: data.get("ct").and_then(|v| v.as_i64()),
            alert: data
                .get("alert")
                .and_then(|v| v.as_str())
                .map(Alert::from_token),
            effect: data
                .get("effect")
                .and_then(|v| v.as_str())
                .map(Effect::from_token),
            colormode: data
                .get("colormode")
                .and_then(|v| v.as_str())
                .map(ColorMode::from_token),
            reachable: data.get("reachable").and_then(|v| v.as_bool()),
        }
    }

    pub fn on(&self) -> Option<bool> {
        self.on
    }

    pub fn brightness(&self) -> Option<i64> {
        self.bri
    }

    pub fn hue(&self) -> Option<i64> {
        self.hue
    }

    pub fn saturation(&self) -> Option<i64> {
        self.sat
    }

    pub fn xy(&self) -> Option<[f64; 2]> {
        let [x, y] = self.xy.as_ref()?;
        Some([x.as_f64()?, y.as_f64()?])
    }

    /// Colour temperature in mired.
    pub fn color_temperature(&self) -> Option<i64> {
        self.ct
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn effect(&self) -> Option<&Effect> {
        self.effect.as_ref()
    }

    pub fn color_mode(&self) -> Option<&ColorMode> {
        self.colormode.as_ref()
    }

    pub fn reachable(&self) -> Option<bool> {
        self.reachable
    }

    /// Store a brightness in `0..=254`. Anything else is logged, returned as
    /// an error and leaves the current brightness untouched.
    pub fn set_brightness(&mut self, value: i64) -> Result<(), BrightnessError> {
        if value > MAX_BRIGHTNESS {
            warn!("{} (got {})", BrightnessError::TooBig, value);
            return Err(BrightnessError::TooBig);
        }
        if value < MIN_BRIGHTNESS {
            warn!("{} (got {})", BrightnessError::TooSmall, value);
            return Err(BrightnessError::TooSmall);
        }
        self.bri = Some(value);
        Ok(())
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = Some(on);
    }

    pub fn set_hue(&mut self, hue: i64) {
        self.hue = Some(hue);
    }

    pub fn set_saturation(&mut self, sat: i64) {
        self.sat = Some(sat);
    }

    /// Non-finite coordinates cannot be encoded and are dropped.
    pub fn set_xy(&mut self, x: f64, y: f64) {
        match (Number::from_f64(x), Number::from_f64(y)) {
            (Some(x), Some(y)) => self.xy = Some([x, y]),
            _ => warn!("xy ({}, {}) is not finite, no change", x, y),
        }
    }

    pub fn set_color_temperature(&mut self, ct: i64) {
        self.ct = Some(ct);
    }

    pub fn set_alert(&mut self, alert: impl Into<Alert>) {
        self.alert = Some(alert.into());
    }

    pub fn set_effect(&mut self, effect: impl Into<Effect>) {
        self.effect = Some(effect.into());
    }

    pub fn set_color_mode(&mut self, mode: impl Into<ColorMode>) {
        self.colormode = Some(mode.into());
    }

    pub fn set_reachable(&mut self, reachable: bool) {
        self.reachable = Some(reachable);
    }

    /// Apply every field of `change`. Brightness goes through
    /// [`set_brightness`](Self::set_brightness) last; its rejection is
    /// returned after the other fields have been written.
    pub fn apply(&mut self, change: StateChange) -> Result<(), BrightnessError> {
        if let Some(on) = change.on {
            self.set_on(on);
        }
        if let Some(hue) = change.hue {
            self.set_hue(hue);
        }
        if let Some(sat) = change.sat {
            self.set_saturation(sat);
        }
        if let Some([x, y]) = change.xy {
            self.set_xy(x, y);
        }
        if let Some(ct) = change.ct {
            self.set_color_temperature(ct);
        }
        if let Some(alert) = change.alert {
            self.set_alert(alert);
        }
        if let Some(effect) = change.effect {
            self.set_effect(effect);
        }
        if let Some(mode) = change.colormode {
            self.set_color_mode(mode);
        }
        match change.bri {
            Some(bri) => self.set_brightness(bri),
            None => Ok(()),
        }
    }

    /// Legacy payload: falsy fields (`false`, `0`, `""`) are dropped along
    /// with unset ones, so an explicit `on: false` is lost.
    pub fn data(&self) -> Map<String, Value> {
        self.data_for(SerializeMode::Legacy)
    }

    /// Payload containing every field that is set, falsy or not.
    pub fn data_strict(&self) -> Map<String, Value> {
        self.data_for(SerializeMode::Strict)
    }

    pub fn data_for(&self, mode: SerializeMode) -> Map<String, Value> {
        collect_entries(self.entries(), mode)
    }

    fn entries(&self) -> [(&'static str, Option<Value>); 10] {
        [
            ("on", self.on.map(Value::from)),
            ("bri", self.bri.map(Value::from)),
            ("hue", self.hue.map(Value::from)),
            ("sat", self.sat.map(Value::from)),
            (
                "xy",
                self.xy
                    .as_ref()
                    .map(|[x, y]| Value::from(vec![x.clone(), y.clone()])),
            ),
            ("ct", self.ct.map(Value::from)),
            ("alert", self.alert.as_ref().map(|a| Value::from(a.as_str()))),
            ("effect", self.effect.as_ref().map(|e| Value::from(e.as_str()))),
            (
                "colormode",
                self.colormode.as_ref().map(|m| Value::from(m.as_str())),
            ),
            ("reachable", self.reachable.map(Value::from)),
        ]
    }
}

/// Keeps the numbers as sent so integer coordinates re-encode unchanged.
fn xy_from_json(value: &Value) -> Option<[Number; 2]> {
    match value.as_array()?.as_slice() {
        [Value::Number(x), Value::Number(y)] => Some([x.clone(), y.clone()]),
        _ => None,
    }
}

/// A batch of state edits; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateChange {
    pub on: Option<bool>,
    pub bri: Option<i64>,
    pub hue: Option<i64>,
    pub sat: Option<i64>,
    pub xy: Option<[f64; 2]>,
    pub ct: Option<i64>,
    pub alert: Option<Alert>,
    pub effect: Option<Effect>,
    pub colormode: Option<ColorMode>,
}

impl StateChange {
    pub fn is_empty(&self) -> bool {
        *self == StateChange::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_state() -> Value {
        json!({
            "on": true,
            "bri": 100,
            "hue": 200,
            "sat": 50,
            "xy": [0.3, 0.3],
            "ct": 300,
            "alert": "select",
            "effect": "colorloop",
            "colormode": "xy",
            "reachable": true
        })
    }

    #[test]
    fn test_truthy_fields_round_trip() {
        let input = full_state();
        let state = BulbState::from_json(&input);
        assert_eq!(Value::Object(state.data()), input);
    }

    #[test]
    fn test_from_json_typed_fields() {
        let state = BulbState::from_json(&full_state());
        assert_eq!(state.on(), Some(true));
        assert_eq!(state.brightness(), Some(100));
        assert_eq!(state.hue(), Some(200));
        assert_eq!(state.saturation(), Some(50));
        assert_eq!(state.xy(), Some([0.3, 0.3]));
        assert_eq!(state.color_temperature(), Some(300));
        assert_eq!(state.alert(), Some(&Alert::Select));
        assert_eq!(state.effect(), Some(&Effect::ColorLoop));
        assert_eq!(state.color_mode(), Some(&ColorMode::Xy));
        assert_eq!(state.reachable(), Some(true));
    }

    #[test]
    fn test_data_key_order() {
        let state = BulbState::from_json(&json!({
            "reachable": true,
            "colormode": "ct",
            "ct": 366,
            "bri": 10,
            "on": true
        }));
        let data = state.data();
        let keys: Vec<&str> = data.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["on", "bri", "ct", "colormode", "reachable"]);
    }

    #[test]
    fn test_integer_xy_round_trips_unchanged() {
        let input = json!({"xy": [1, 0]});
        let state = BulbState::from_json(&input);
        assert_eq!(state.xy(), Some([1.0, 0.0]));
        assert_eq!(Value::Object(state.data()), input);
        assert_eq!(Value::Object(state.data_strict()), input);
    }

    #[test]
    fn test_non_finite_xy_is_dropped() {
        let mut state = BulbState::from_json(&json!({"xy": [0.3, 0.3]}));
        state.set_xy(f64::NAN, 0.1);
        assert_eq!(state.xy(), Some([0.3, 0.3]));
    }

    #[test]
    fn test_off_is_omitted_from_legacy_data() {
        let state = BulbState::from_json(&json!({"on": false}));
        assert_eq!(state.on(), Some(false));
        assert!(!state.data().contains_key("on"));
    }

    #[test]
    fn test_zero_brightness_is_omitted_from_legacy_data() {
        let state = BulbState::from_json(&json!({"bri": 0, "alert": ""}));
        assert!(state.data().is_empty());
    }

    #[test]
    fn test_strict_data_keeps_falsy_values() {
        let state = BulbState::from_json(&json!({"on": false, "bri": 0, "reachable": false}));
        let data = state.data_strict();
        assert_eq!(
            Value::Object(data),
            json!({"on": false, "bri": 0, "reachable": false})
        );
    }

    #[test]
    fn test_empty_and_null_input() {
        assert!(BulbState::from_json(&json!({})).data().is_empty());
        assert!(BulbState::from_json(&Value::Null).data_strict().is_empty());
        assert_eq!(BulbState::from_json(&Value::Null), BulbState::default());
    }

    #[test]
    fn test_unknown_and_mistyped_keys_are_ignored() {
        let state = BulbState::from_json(&json!({
            "mode": "homeautomation",
            "on": "yes",
            "bri": 12.5,
            "xy": [0.1],
            "hue": 1000
        }));
        assert_eq!(state.on(), None);
        assert_eq!(state.brightness(), None);
        assert_eq!(state.xy(), None);
        assert_eq!(Value::Object(state.data()), json!({"hue": 1000}));
    }

    #[test]
    fn test_construction_does_not_validate_brightness() {
        let state = BulbState::from_json(&json!({"bri": 300}));
        assert_eq!(state.brightness(), Some(300));
    }

    #[test]
    fn test_brightness_bounds_accepted() {
        let mut state = BulbState::default();
        assert_eq!(state.set_brightness(0), Ok(()));
        assert_eq!(state.brightness(), Some(0));
        assert_eq!(state.set_brightness(254), Ok(()));
        assert_eq!(state.brightness(), Some(254));
    }

    #[test]
    fn test_brightness_out_of_range_rejected() {
        let mut state = BulbState::from_json(&json!({"bri": 120}));

        assert_eq!(state.set_brightness(255), Err(BrightnessError::TooBig));
        assert_eq!(state.brightness(), Some(120));

        assert_eq!(state.set_brightness(-1), Err(BrightnessError::TooSmall));
        assert_eq!(state.brightness(), Some(120));
    }

    #[test]
    fn test_rejection_keeps_unset_brightness_unset() {
        let mut state = BulbState::default();
        assert!(state.set_brightness(1000).is_err());
        assert_eq!(state.brightness(), None);
    }

    #[test]
    fn test_brightness_error_messages() {
        assert_eq!(
            BrightnessError::TooBig.to_string(),
            "brightness value too big, no change"
        );
        assert_eq!(
            BrightnessError::TooSmall.to_string(),
            "brightness value too small, no change"
        );
    }

    #[test]
    fn test_plain_setters() {
        let mut state = BulbState::default();
        state.set_on(true);
        state.set_hue(-5);
        state.set_saturation(999);
        state.set_xy(0.7, 0.2);
        state.set_color_temperature(153);
        state.set_alert("lselect");
        state.set_effect(Effect::None);
        state.set_color_mode("hs");
        state.set_reachable(false);

        assert_eq!(
            Value::Object(state.data_strict()),
            json!({
                "on": true,
                "hue": -5,
                "sat": 999,
                "xy": [0.7, 0.2],
                "ct": 153,
                "alert": "lselect",
                "effect": "none",
                "colormode": "hs",
                "reachable": false
            })
        );
    }

    #[test]
    fn test_apply_change() {
        let mut state = BulbState::from_json(&json!({"on": false, "bri": 1, "hue": 10}));
        let change = StateChange {
            on: Some(true),
            bri: Some(200),
            xy: Some([0.4, 0.5]),
            colormode: Some(ColorMode::Xy),
            ..Default::default()
        };
        assert_eq!(state.apply(change), Ok(()));
        assert_eq!(state.on(), Some(true));
        assert_eq!(state.brightness(), Some(200));
        assert_eq!(state.hue(), Some(10));
        assert_eq!(state.xy(), Some([0.4, 0.5]));
        assert_eq!(state.color_mode(), Some(&ColorMode::Xy));
    }

    #[test]
    fn test_apply_with_bad_brightness_still_applies_rest() {
        let mut state = BulbState::from_json(&json!({"bri": 50}));
        let change = StateChange {
            on: Some(true),
            bri: Some(255),
            ..Default::default()
        };
        assert_eq!(state.apply(change), Err(BrightnessError::TooBig));
        assert_eq!(state.on(), Some(true));
        assert_eq!(state.brightness(), Some(50));
    }

    #[test]
    fn test_state_change_is_empty() {
        assert!(StateChange::default().is_empty());
        let change = StateChange {
            ct: Some(400),
            ..Default::default()
        };
        assert!(!change.is_empty());
    }
}
