use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::model::ScoreError;
use crate::model::metrics::{CityMetrics, PillarTable};
use crate::model::pillars::PillarDef;

#[derive(Debug)]
pub struct Stage1Output {
    pub cities: Vec<CityMetrics>,
}

/// Join the per-pillar tables into one record per city. Every pillar must
/// cover exactly the same city set; the first pillar's row order becomes
/// the canonical input order for the rest of the pipeline.
pub fn run_stage1(defs: &[PillarDef], tables: &[PillarTable]) -> Result<Stage1Output, ScoreError> {
    if defs.is_empty() {
        return Err(ScoreError::NoPillars);
    }
    debug_assert_eq!(defs.len(), tables.len());

    for table in tables {
        let mut seen: HashSet<&str> = HashSet::with_capacity(table.records.len());
        for record in &table.records {
            if !seen.insert(record.city.as_str()) {
                return Err(ScoreError::DuplicateCity {
                    pillar: table.pillar_id.clone(),
                    city: record.city.clone(),
                });
            }
        }
    }

    let first = &tables[0];
    if first.records.is_empty() {
        return Err(ScoreError::EmptyInput);
    }

    // No later table may introduce a city the first one lacks.
    let canonical: HashSet<&str> = first.records.iter().map(|r| r.city.as_str()).collect();
    for table in &tables[1..] {
        for record in &table.records {
            if !canonical.contains(record.city.as_str()) {
                return Err(ScoreError::MissingData {
                    pillar: first.pillar_id.clone(),
                    city: record.city.clone(),
                });
            }
        }
    }

    let mut by_city: Vec<HashMap<&str, usize>> = Vec::with_capacity(tables.len().saturating_sub(1));
    for table in &tables[1..] {
        let index: HashMap<&str, usize> = table
            .records
            .iter()
            .enumerate()
            .map(|(idx, record)| (record.city.as_str(), idx))
            .collect();
        by_city.push(index);
    }

    let mut cities = Vec::with_capacity(first.records.len());
    for record in &first.records {
        let mut pillars = Vec::with_capacity(tables.len());
        pillars.push(record.values.clone());
        for (table, index) in tables[1..].iter().zip(&by_city) {
            let idx = index.get(record.city.as_str()).copied().ok_or_else(|| {
                ScoreError::MissingData {
                    pillar: table.pillar_id.clone(),
                    city: record.city.clone(),
                }
            })?;
            pillars.push(table.records[idx].values.clone());
        }
        cities.push(CityMetrics {
            city: record.city.clone(),
            pillars,
        });
    }

    info!(
        "collected {} cities across {} pillars",
        cities.len(),
        defs.len()
    );
    Ok(Stage1Output { cities })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_collect.rs"]
mod tests;
