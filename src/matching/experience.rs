use crate::levels::ExperienceLevel;

/// Rank assumed when a side does not state its level. Mid is the neutral
/// middle of the four-step ladder, so unknown experience is not punished.
const UNKNOWN_RANK: u8 = 2;

/// Distance-based seniority fit: adjacent levels lose a quarter of the
/// score, opposite ends of the ladder score near zero.
pub fn match_experience(
    job_level: Option<ExperienceLevel>,
    candidate_level: Option<ExperienceLevel>,
) -> f64 {
    let job_rank = job_level.map(ExperienceLevel::rank).unwrap_or(UNKNOWN_RANK);
    let candidate_rank = candidate_level
        .map(ExperienceLevel::rank)
        .unwrap_or(UNKNOWN_RANK);

    let distance = job_rank.abs_diff(candidate_rank) as f64;
    (1.0 - distance / 4.0).max(0.0)
}
