pub mod metrics;
pub mod pillars;
pub mod scores;

use thiserror::Error;

/// Scoring-side failures. Input parsing has its own error type; everything
/// here is raised after tables are already in memory.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("missing data: city {city} absent from pillar {pillar} input")]
    MissingData { pillar: String, city: String },

    #[error("missing data: city {city} lacks field {field} required by pillar {pillar}")]
    MissingField {
        pillar: String,
        city: String,
        field: String,
    },

    #[error("invalid input: duplicate city {city} in pillar {pillar} input")]
    DuplicateCity { pillar: String, city: String },

    #[error("validation error: non-finite value for field {field} of city {city} in pillar {pillar}")]
    NonFiniteValue {
        pillar: String,
        city: String,
        field: String,
    },

    #[error("validation error: no cities in input")]
    EmptyInput,

    #[error("validation error: no pillars configured")]
    NoPillars,

    #[error("validation error: pillar {pillar}: {reason}")]
    InvalidPillar { pillar: String, reason: String },

    #[error("validation error: pillar {pillar} weight {weight} outside [0, 1]")]
    WeightRange { pillar: String, weight: f64 },

    #[error("validation error: pillar weights must sum to 1.0, got {sum:.3}")]
    WeightSum { sum: f64 },

    #[error("validation error: pillar {pillar} score {score} for city {city} outside [0, 100]")]
    ScoreRange {
        pillar: String,
        city: String,
        score: f64,
    },
}
