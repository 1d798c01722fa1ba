pub mod csv;
pub mod html;
pub mod json;
pub mod table;

use serde::Serialize;

use crate::model::scores::RankedCity;

/// Composite-score spread over the ranked entries.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSummary {
    pub best_city: String,
    pub best: f64,
    pub worst_city: String,
    pub worst: f64,
    pub mean: f64,
}

pub fn summarize(entries: &[RankedCity]) -> ScoreSummary {
    if entries.is_empty() {
        return ScoreSummary {
            best_city: String::new(),
            best: 0.0,
            worst_city: String::new(),
            worst: 0.0,
            mean: 0.0,
        };
    }
    let best = &entries[0];
    let worst = &entries[entries.len() - 1];
    let mean = entries.iter().map(|e| e.composite).sum::<f64>() / entries.len() as f64;
    ScoreSummary {
        best_city: best.city.clone(),
        best: best.composite,
        worst_city: worst.city.clone(),
        worst: worst.composite,
        mean,
    }
}

/// Display precision used across the text and HTML surfaces.
pub fn format_score(v: f64) -> String {
    format!("{:.1}", v)
}

/// Full precision for the machine-readable CSV.
pub fn format_score_full(v: f64) -> String {
    format!("{:.6}", v)
}
