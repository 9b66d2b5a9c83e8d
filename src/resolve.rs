use std::io::Read;

use log::debug;

use crate::error::AppError;
use crate::models::bulb::{Bulb, ParseOptions};
use crate::models::lights::Lights;

/// Read a `/lights` payload from a file, or from stdin when `source` is `-`.
pub fn load_lights(source: &str, options: &ParseOptions) -> Result<Lights, AppError> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)?
    };

    let value: serde_json::Value = serde_json::from_str(&text)?;
    let lights = Lights::from_json(&value, options)?;
    debug!("loaded {} light(s) from {}", lights.len(), source);
    Ok(lights)
}

/// Resolve a bulb by id or name.
///
/// Resolution priority:
/// 1. Exact id match
/// 2. Exact name match
/// 3. Case-insensitive name match
/// 4. Partial name match (only if exactly one result)
pub fn resolve_index(bulbs: &[Bulb], name_or_id: &str) -> Result<usize, AppError> {
    if let Some(i) = bulbs.iter().position(|b| b.id() == name_or_id) {
        return Ok(i);
    }

    if let Some(i) = bulbs.iter().position(|b| b.name() == Some(name_or_id)) {
        return Ok(i);
    }

    let name_lower = name_or_id.to_lowercase();
    let lowered = |b: &Bulb| b.name().map(|n| n.to_lowercase());

    if let Some(i) = bulbs
        .iter()
        .position(|b| lowered(b).as_deref() == Some(name_lower.as_str()))
    {
        return Ok(i);
    }

    let partial_matches: Vec<usize> = bulbs
        .iter()
        .enumerate()
        .filter(|(_, b)| lowered(b).is_some_and(|n| n.contains(&name_lower)))
        .map(|(i, _)| i)
        .collect();

    match partial_matches.as_slice() {
        [i] => Ok(*i),
        [] => Err(AppError::BulbNotFound(name_or_id.to_string())),
        many => {
            let names: Vec<&str> = many.iter().map(|&i| bulbs[i].name_or_id()).collect();
            Err(AppError::BulbNotFound(format!(
                "Multiple bulbs match '{}': {}",
                name_or_id,
                names.join(", ")
            )))
        }
    }
}
