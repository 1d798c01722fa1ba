pub mod stage1_collect;
pub mod stage2_aggregate;
pub mod stage3_normalize;
pub mod stage4_rank;
pub mod stage5_report;

use crate::model::ScoreError;
use crate::model::metrics::PillarTable;
use crate::model::pillars::{PillarDef, validate_defs};
use crate::model::scores::RankedTable;

/// Full scoring pass: join tables, aggregate fields, normalize, rank.
/// Tables must be in pillar definition order. Fails on the first invariant
/// violation; no partial table is ever produced.
pub fn run_scoring(defs: &[PillarDef], tables: &[PillarTable]) -> Result<RankedTable, ScoreError> {
    validate_defs(defs)?;
    debug_assert_eq!(defs.len(), tables.len());
    let collected = stage1_collect::run_stage1(defs, tables)?;
    let aggregated = stage2_aggregate::run_stage2(defs, &collected.cities)?;
    let normalized = stage3_normalize::run_stage3(defs, &aggregated);
    stage4_rank::run_stage4(defs, &collected.cities, &normalized)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;
