pub mod education;
pub mod experience;
pub mod filters;
pub mod language;
pub mod pipeline;
pub mod recommendations;
pub mod salary;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use filters::JobFilters;
pub use pipeline::{MatchingEngine, RankedJob};
pub use scoring::{calculate_match, MatchConfig, MatchResult, ScoreBreakdown, ScoringEngine};
pub use weights::{Weights, DEFAULT_WEIGHTS};
