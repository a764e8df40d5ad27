use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::matching::{RankedJob, ScoreBreakdown as CoreScoreBreakdown};
use crate::JobPosting;

/// One ranked entry as returned to the client: the posting itself, the
/// composite score, its per-dimension breakdown, and improvement hints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResponse {
    pub job: JobPosting,
    pub match_score: u8,
    pub match_details: ScoreBreakdown,
    pub recommendations: Vec<String>,
    pub matched_at: DateTime<Utc>,
}

impl JobMatchResponse {
    pub fn from_ranked(ranked: RankedJob, matched_at: DateTime<Utc>) -> Self {
        Self {
            job: ranked.job,
            match_score: ranked.result.overall_score,
            match_details: ScoreBreakdown::from(&ranked.result.breakdown),
            recommendations: ranked.result.recommendations,
            matched_at,
        }
    }
}

/// Wire copy of the per-dimension breakdown, narrowed to f32 for payload
/// size; the engine keeps f64 internally.
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub skills_match: f32,
    pub experience_match: f32,
    pub education_match: f32,
    pub language_match: f32,
    pub salary_match: f32,
}

impl From<&CoreScoreBreakdown> for ScoreBreakdown {
    fn from(value: &CoreScoreBreakdown) -> Self {
        Self {
            skills_match: value.skills as f32,
            experience_match: value.experience as f32,
            education_match: value.education as f32,
            language_match: value.language as f32,
            salary_match: value.salary as f32,
        }
    }
}
