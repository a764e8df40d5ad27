use tracing::debug;

use crate::{CandidateProfile, JobPosting};

use super::{
    filters::JobFilters,
    scoring::{MatchConfig, MatchResult, ScoringEngine},
};

#[derive(Debug, Clone, PartialEq)]
pub struct RankedJob {
    pub job: JobPosting,
    pub result: MatchResult,
}

/// Filter -> score -> sort over a fetched job collection. The storage
/// collaborator supplies the jobs (already restricted to active postings);
/// pagination is applied by the caller on the returned list.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    scoring: ScoringEngine,
}

impl MatchingEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            scoring: ScoringEngine::new(config),
        }
    }

    /// Scores every job that passes the filters and returns the full list,
    /// descending by overall score. The sort is stable, so tied jobs keep
    /// their input order.
    pub fn rank_jobs(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobPosting],
        filters: &JobFilters,
    ) -> Vec<RankedJob> {
        let mut ranked: Vec<RankedJob> = jobs
            .iter()
            .filter(|job| filters.matches(job))
            .map(|job| RankedJob {
                job: job.clone(),
                result: self.scoring.score(job, candidate),
            })
            .collect();

        ranked.sort_by(|a, b| b.result.overall_score.cmp(&a.result.overall_score));

        debug!(
            total = jobs.len(),
            retained = ranked.len(),
            "ranked jobs for candidate"
        );

        ranked
    }
}
