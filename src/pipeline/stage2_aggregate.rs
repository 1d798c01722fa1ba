use std::collections::BTreeMap;

use crate::model::ScoreError;
use crate::model::metrics::CityMetrics;
use crate::model::pillars::{CombineRule, PillarDef};

#[derive(Debug)]
pub struct Stage2Output {
    /// One raw value column per pillar, row order matching the input cities.
    pub raw: Vec<Vec<f64>>,
}

/// Collapse each pillar's configured fields into a single raw value per
/// city. Field checks happen here: a configured field must be present and
/// finite for every city, or the whole run fails.
pub fn run_stage2(defs: &[PillarDef], cities: &[CityMetrics]) -> Result<Stage2Output, ScoreError> {
    let mut raw: Vec<Vec<f64>> = Vec::with_capacity(defs.len());
    for (p, def) in defs.iter().enumerate() {
        let mut column = Vec::with_capacity(cities.len());
        for metrics in cities {
            column.push(combine_fields(def, &metrics.city, &metrics.pillars[p])?);
        }
        raw.push(column);
    }
    Ok(Stage2Output { raw })
}

fn combine_fields(
    def: &PillarDef,
    city: &str,
    values: &BTreeMap<String, f64>,
) -> Result<f64, ScoreError> {
    match def.combine {
        CombineRule::Mean => {
            let mut sum = 0.0;
            for field in &def.fields {
                let value =
                    values
                        .get(field)
                        .copied()
                        .ok_or_else(|| ScoreError::MissingField {
                            pillar: def.id.clone(),
                            city: city.to_string(),
                            field: field.clone(),
                        })?;
                if !value.is_finite() {
                    return Err(ScoreError::NonFiniteValue {
                        pillar: def.id.clone(),
                        city: city.to_string(),
                        field: field.clone(),
                    });
                }
                sum += value;
            }
            Ok(sum / def.fields.len() as f64)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
