use tracing::warn;

use crate::model::metrics::Direction;
use crate::model::pillars::PillarDef;
use crate::model::scores::PillarStats;
use crate::pipeline::stage2_aggregate::Stage2Output;

/// Score assigned to every city when a pillar has zero variance.
pub const DEGENERATE_SCORE: f64 = 50.0;

#[derive(Debug)]
pub struct Stage3Output {
    pub columns: Vec<Vec<f64>>,
    pub stats: Vec<PillarStats>,
}

/// Min-max rescale one raw column to [0, 100], orienting the scale so that
/// 100 is always best. A constant column maps every city to
/// [`DEGENERATE_SCORE`] rather than failing.
pub fn normalize_metric(values: &[f64], direction: Direction) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let (min, max) = min_max(values);
    if max == min {
        return vec![DEGENERATE_SCORE; values.len()];
    }
    let span = max - min;
    values
        .iter()
        .map(|&v| {
            let score = match direction {
                Direction::HigherIsBetter => 100.0 * (v - min) / span,
                Direction::LowerIsBetter => 100.0 * (max - v) / span,
            };
            score.clamp(0.0, 100.0)
        })
        .collect()
}

pub fn run_stage3(defs: &[PillarDef], aggregated: &Stage2Output) -> Stage3Output {
    let mut columns = Vec::with_capacity(defs.len());
    let mut stats = Vec::with_capacity(defs.len());
    for (def, raw) in defs.iter().zip(&aggregated.raw) {
        let (raw_min, raw_max) = min_max(raw);
        let degenerate = !raw.is_empty() && raw_max == raw_min;
        if degenerate {
            warn!(
                "pillar {} has zero variance; scoring all cities {}",
                def.id, DEGENERATE_SCORE
            );
        }
        columns.push(normalize_metric(raw, def.direction));
        stats.push(PillarStats {
            pillar: def.id.clone(),
            raw_min,
            raw_max,
            degenerate,
        });
    }
    Stage3Output { columns, stats }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_normalize.rs"]
mod tests;
