use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::InputError;
use crate::model::ScoreError;
use crate::model::metrics::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombineRule {
    Mean,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PillarDef {
    pub id: String,
    pub name: String,
    pub fields: Vec<String>,
    pub direction: Direction,
    #[serde(default = "default_combine")]
    pub combine: CombineRule,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_combine() -> CombineRule {
    CombineRule::Mean
}

fn default_weight() -> f64 {
    1.0 / BUILTIN_PILLARS.len() as f64
}

const AIR_QUALITY_FIELDS: &[&str] = &["pm25", "no2", "o3"];
const GREEN_SPACE_FIELDS: &[&str] = &["green_percent"];
const TRANSPORT_FIELDS: &[&str] = &["bus_score", "rail_score"];
const WASTE_FIELDS: &[&str] = &["recycling_rate"];

const BUILTIN_PILLARS: &[(&str, &str, &[&str], Direction)] = &[
    (
        "air_quality",
        "Air Quality",
        AIR_QUALITY_FIELDS,
        Direction::LowerIsBetter,
    ),
    (
        "green_space",
        "Green Space",
        GREEN_SPACE_FIELDS,
        Direction::HigherIsBetter,
    ),
    (
        "transport",
        "Transport",
        TRANSPORT_FIELDS,
        Direction::HigherIsBetter,
    ),
    (
        "waste",
        "Waste Management",
        WASTE_FIELDS,
        Direction::HigherIsBetter,
    ),
];

/// Built-in pillar set, equal-weighted.
pub fn builtin_pillars() -> Vec<PillarDef> {
    BUILTIN_PILLARS
        .iter()
        .map(|&(id, name, fields, direction)| PillarDef {
            id: id.to_string(),
            name: name.to_string(),
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
            direction,
            combine: CombineRule::Mean,
            weight: default_weight(),
        })
        .collect()
}

/// Load a replacement pillar set from a JSON definition file.
pub fn load_pillar_defs(path: &Path) -> Result<Vec<PillarDef>, InputError> {
    let text = fs::read_to_string(path)?;
    let defs: Vec<PillarDef> = serde_json::from_str(&text)?;
    Ok(defs)
}

/// Structural checks on a pillar set; weight checks happen at ranking time.
pub fn validate_defs(defs: &[PillarDef]) -> Result<(), ScoreError> {
    if defs.is_empty() {
        return Err(ScoreError::NoPillars);
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(defs.len());
    for def in defs {
        if def.id.is_empty() {
            return Err(ScoreError::InvalidPillar {
                pillar: def.name.clone(),
                reason: "empty pillar id".to_string(),
            });
        }
        if !seen.insert(def.id.as_str()) {
            return Err(ScoreError::InvalidPillar {
                pillar: def.id.clone(),
                reason: "duplicate pillar id".to_string(),
            });
        }
        if def.fields.is_empty() {
            return Err(ScoreError::InvalidPillar {
                pillar: def.id.clone(),
                reason: "no fields configured".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/pillars.rs"]
mod tests;
