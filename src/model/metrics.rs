use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

#[derive(Debug, Clone)]
pub struct CityRecord {
    pub city: String,
    pub values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct PillarTable {
    pub pillar_id: String,
    pub records: Vec<CityRecord>,
}

/// One city with its raw field values grouped per pillar, pillar order
/// matching the configured definitions.
#[derive(Debug, Clone)]
pub struct CityMetrics {
    pub city: String,
    pub pillars: Vec<BTreeMap<String, f64>>,
}
