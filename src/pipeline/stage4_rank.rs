use std::cmp::Ordering;

use tracing::info;

use crate::model::ScoreError;
use crate::model::metrics::CityMetrics;
use crate::model::pillars::PillarDef;
use crate::model::scores::{RankedCity, RankedTable};
use crate::pipeline::stage3_normalize::Stage3Output;

pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights must each sit in [0, 1] and sum to 1.0 within
/// [`WEIGHT_SUM_TOLERANCE`].
pub fn validate_weights(defs: &[PillarDef]) -> Result<(), ScoreError> {
    if defs.is_empty() {
        return Err(ScoreError::NoPillars);
    }
    let mut sum = 0.0;
    for def in defs {
        if !def.weight.is_finite() || def.weight < 0.0 || def.weight > 1.0 {
            return Err(ScoreError::WeightRange {
                pillar: def.id.clone(),
                weight: def.weight,
            });
        }
        sum += def.weight;
    }
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(ScoreError::WeightSum { sum });
    }
    Ok(())
}

/// Weighted composite per city, then a stable descending sort. Cities with
/// bit-identical composites keep their input order, so ranks are unique
/// and reproducible across runs.
pub fn run_stage4(
    defs: &[PillarDef],
    cities: &[CityMetrics],
    normalized: &Stage3Output,
) -> Result<RankedTable, ScoreError> {
    validate_weights(defs)?;
    debug_assert_eq!(defs.len(), normalized.columns.len());

    let n = cities.len();
    let mut composites = Vec::with_capacity(n);
    for (i, metrics) in cities.iter().enumerate() {
        let mut composite = 0.0;
        for (p, def) in defs.iter().enumerate() {
            let score = normalized.columns[p][i];
            if !(0.0..=100.0).contains(&score) {
                return Err(ScoreError::ScoreRange {
                    pillar: def.id.clone(),
                    city: metrics.city.clone(),
                    score,
                });
            }
            composite += def.weight * score;
        }
        composites.push(composite);
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        composites[b]
            .partial_cmp(&composites[a])
            .unwrap_or(Ordering::Equal)
    });

    let mut entries = Vec::with_capacity(n);
    for (rank0, &i) in order.iter().enumerate() {
        entries.push(RankedCity {
            rank: (rank0 + 1) as u32,
            city: cities[i].city.clone(),
            composite: composites[i],
            pillar_scores: normalized.columns.iter().map(|col| col[i]).collect(),
        });
    }

    if let Some(top) = entries.first() {
        info!(
            "ranked {} cities; top: {} ({:.1})",
            entries.len(),
            top.city,
            top.composite
        );
    }

    Ok(RankedTable {
        pillars: defs.iter().map(|d| d.id.clone()).collect(),
        entries,
        stats: normalized.stats.clone(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_rank.rs"]
mod tests;
