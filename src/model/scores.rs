use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PillarStats {
    pub pillar: String,
    pub raw_min: f64,
    pub raw_max: f64,
    pub degenerate: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedCity {
    pub rank: u32,
    pub city: String,
    #[serde(rename = "sustainability_score")]
    pub composite: f64,
    pub pillar_scores: Vec<f64>,
}

/// Final pipeline product: cities in rank order plus the per-pillar
/// normalization stats that produced the scores.
#[derive(Debug, Clone, Serialize)]
pub struct RankedTable {
    pub pillars: Vec<String>,
    pub entries: Vec<RankedCity>,
    pub stats: Vec<PillarStats>,
}
