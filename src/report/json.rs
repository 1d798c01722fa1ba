use serde::Serialize;

use crate::model::pillars::PillarDef;
use crate::model::scores::{PillarStats, RankedCity};
use crate::report::ScoreSummary;

/// Shape of summary.json. Pillar order is the configured order and the
/// `pillar_scores` arrays in `rankings` follow it.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDoc {
    pub tool_name: String,
    pub tool_version: String,
    pub input_source: String,
    pub n_cities: usize,
    pub pillars: Vec<PillarDef>,
    pub normalization: Vec<PillarStats>,
    pub composite: ScoreSummary,
    pub rankings: Vec<RankedCity>,
}

pub fn render_summary_json(doc: &SummaryDoc) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}
