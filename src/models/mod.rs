pub mod bulb;
pub mod bulb_state;
pub mod lights;
pub mod mode;

use serde_json::{Map, Value};

/// How a model is flattened back into a bridge payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SerializeMode {
    /// Drop every field that is absent, `false`, zero or an empty string.
    #[default]
    Legacy,
    /// Drop only absent fields.
    Strict,
}

/// Falsiness as the bridge payloads have always been written: `null`,
/// `false`, numeric zero and `""` are falsy, everything else is truthy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Collect `(key, value)` entries into a payload, keeping field order.
pub(crate) fn collect_entries<I>(entries: I, mode: SerializeMode) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'static str, Option<Value>)>,
{
    let mut data = Map::new();
    for (key, value) in entries {
        let Some(value) = value else { continue };
        if mode == SerializeMode::Legacy && !is_truthy(&value) {
            continue;
        }
        data.insert(key.to_string(), value);
    }
    data
}
