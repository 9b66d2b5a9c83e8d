use log::debug;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::models::bulb::{Bulb, ParseOptions};
use crate::models::SerializeMode;
use crate::resolve::resolve_index;

/// The bridge's light collection: bulb records keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lights {
    bulbs: Vec<Bulb>,
}

impl Lights {
    pub fn new(bulbs: Vec<Bulb>) -> Self {
        Self { bulbs }
    }

    pub fn from_json(data: &Value, options: &ParseOptions) -> Result<Self, AppError> {
        let obj = data.as_object().ok_or_else(|| {
            AppError::InvalidInput("expected a JSON object of lights keyed by id".to_string())
        })?;

        let mut bulbs = Vec::with_capacity(obj.len());
        for (id, record) in obj {
            if !record.is_object() {
                debug!("skipping light '{}': record is not an object", id);
                continue;
            }
            bulbs.push(Bulb::from_json_with(id.as_str(), record, options));
        }

        Ok(Self { bulbs })
    }

    pub fn len(&self) -> usize {
        self.bulbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bulbs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bulb> {
        self.bulbs.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Bulb> {
        self.bulbs.iter().find(|b| b.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Bulb> {
        self.bulbs.iter_mut().find(|b| b.id() == id)
    }

    /// Find a bulb by id or name, see [`resolve_index`].
    pub fn resolve(&self, name_or_id: &str) -> Result<&Bulb, AppError> {
        let index = resolve_index(&self.bulbs, name_or_id)?;
        Ok(&self.bulbs[index])
    }

    pub fn resolve_mut(&mut self, name_or_id: &str) -> Result<&mut Bulb, AppError> {
        let index = resolve_index(&self.bulbs, name_or_id)?;
        Ok(&mut self.bulbs[index])
    }

    pub fn data(&self) -> Map<String, Value> {
        self.data_for(SerializeMode::Legacy)
    }

    pub fn data_strict(&self) -> Map<String, Value> {
        self.data_for(SerializeMode::Strict)
    }

    pub fn data_for(&self, mode: SerializeMode) -> Map<String, Value> {
        self.bulbs
            .iter()
            .map(|b| (b.id().to_string(), Value::Object(b.data_for(mode))))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Lights {
    type Item = &'a Bulb;
    type IntoIter = std::slice::Iter<'a, Bulb>;

    fn into_iter(self) -> Self::IntoIter {
        self.bulbs.iter()
    }
}
