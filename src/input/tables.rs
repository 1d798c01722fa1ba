use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::Value;
use tracing::debug;

use crate::input::InputError;
use crate::model::metrics::{CityRecord, PillarTable};

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parse one pillar table: a JSON array of objects, each with a "city"
/// string and numeric metric fields. Non-numeric members are ignored so
/// provenance fields like "source" or "year" can ride along.
pub fn parse_table(pillar_id: &str, path: &Path) -> Result<PillarTable, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let rows: Vec<Value> = serde_json::from_str(&text)?;
    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or_else(|| {
            InputError::InvalidInput(format!(
                "{}: row {} is not an object",
                path.display(),
                idx + 1
            ))
        })?;
        let city = obj
            .get("city")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                InputError::InvalidInput(format!(
                    "{}: row {} has no city string",
                    path.display(),
                    idx + 1
                ))
            })?
            .trim();
        if city.is_empty() {
            return Err(InputError::InvalidInput(format!(
                "{}: row {} has an empty city name",
                path.display(),
                idx + 1
            )));
        }
        let mut values: BTreeMap<String, f64> = BTreeMap::new();
        for (key, value) in obj {
            if key == "city" {
                continue;
            }
            match value.as_f64() {
                Some(num) => {
                    values.insert(key.clone(), num);
                }
                None => {
                    debug!(
                        "ignoring non-numeric member {key} for city {city} in {}",
                        path.display()
                    );
                }
            }
        }
        records.push(CityRecord {
            city: city.to_string(),
            values,
        });
    }

    Ok(PillarTable {
        pillar_id: pillar_id.to_string(),
        records,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tables.rs"]
mod tests;
