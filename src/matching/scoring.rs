use crate::{CandidateProfile, JobPosting};

use super::{
    education::match_education, experience::match_experience, language::match_languages,
    recommendations, salary::match_salary, skills::match_skills, weights::Weights,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchConfig {
    pub weights: Weights,
}

/// Per-dimension sub-scores, each in [0, 1]. Always fully populated:
/// dimensions without data receive their documented neutral default, so the
/// composite is defined for any structurally valid input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub language: f64,
    pub salary: f64,
}

impl ScoreBreakdown {
    pub fn weighted_total(&self, weights: &Weights) -> f64 {
        self.skills * weights.skills
            + self.experience * weights.experience
            + self.education * weights.education
            + self.language * weights.language
            + self.salary * weights.salary
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Weighted composite scaled to [0, 100].
    pub overall_score: u8,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
}

/// Scores one (job, candidate) pair with the default weights.
pub fn calculate_match(job: &JobPosting, candidate: &CandidateProfile) -> MatchResult {
    ScoringEngine::default().score(job, candidate)
}

/// Pure scorer: no I/O, no shared state. Every call with the same inputs
/// yields the same result.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: MatchConfig,
}

impl ScoringEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, job: &JobPosting, candidate: &CandidateProfile) -> MatchResult {
        let skills = match_skills(&job.skills, &candidate.skills);

        let breakdown = ScoreBreakdown {
            skills: skills.score,
            experience: match_experience(job.experience_level, candidate.experience_level),
            education: match_education(&job.education_requirements, &candidate.education),
            language: match_languages(&job.language_requirements, &candidate.languages),
            salary: match_salary(job.salary, candidate.salary_expectation),
        };

        let overall_score = (breakdown.weighted_total(&self.config.weights) * 100.0).round() as u8;
        let recommendations = recommendations::build(job, &breakdown, &skills.missing);

        MatchResult {
            overall_score,
            breakdown,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{ExperienceLevel, LanguageProficiency};
    use crate::{CandidateSkill, LanguageRequirement, SalaryRange};

    fn full_job() -> JobPosting {
        JobPosting {
            id: Some(1),
            category: Some("cabin-crew".into()),
            skills: vec!["Customer Service".into(), "Safety Procedures".into()],
            experience_level: Some(ExperienceLevel::Mid),
            education_requirements: vec!["High School Diploma".into()],
            language_requirements: vec![LanguageRequirement {
                language: "English".into(),
                proficiency: LanguageProficiency::Fluent,
            }],
            salary: Some(SalaryRange {
                min: 3000.0,
                max: 5000.0,
            }),
            is_active: true,
            ..JobPosting::default()
        }
    }

    fn full_candidate() -> CandidateProfile {
        CandidateProfile {
            skills: vec![
                CandidateSkill::named("customer service"),
                CandidateSkill::named("safety procedures"),
            ],
            experience_level: Some(ExperienceLevel::Mid),
            education: vec!["Bachelor of Arts".into()],
            languages: vec![LanguageRequirement {
                language: "english".into(),
                proficiency: LanguageProficiency::Native,
            }],
            salary_expectation: Some(4000.0),
        }
    }

    #[test]
    fn strong_candidate_scores_high_with_no_recommendations() {
        let result = calculate_match(&full_job(), &full_candidate());

        // skills 1.0, experience 1.0, education 0.7, language 1.0, salary 1.0
        // -> 0.4 + 0.25 + 0.105 + 0.1 + 0.1 = 0.955
        assert_eq!(result.overall_score, 96);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn empty_profile_still_produces_a_bounded_score() {
        let result = calculate_match(&full_job(), &CandidateProfile::default());

        // skills 0, experience 1.0 (mid assumed), education 0, language 0,
        // salary 0.5 -> 0.25 + 0.05 = 0.30
        assert_eq!(result.overall_score, 30);
        assert!(result.overall_score <= 100);
        assert_eq!(result.breakdown.salary, 0.5);
    }

    #[test]
    fn empty_job_against_empty_candidate_scores_full_on_requirements() {
        let job = JobPosting::default();
        let result = calculate_match(&job, &CandidateProfile::default());

        assert_eq!(result.breakdown.skills, 1.0);
        assert_eq!(result.breakdown.education, 1.0);
        assert_eq!(result.breakdown.language, 1.0);
        // 0.4 + 0.25 + 0.15 + 0.1 + 0.05 = 0.95
        assert_eq!(result.overall_score, 95);
    }

    #[test]
    fn filling_in_a_midpoint_expectation_never_lowers_the_score() {
        let job = full_job();
        let mut candidate = full_candidate();
        candidate.salary_expectation = None;
        let without = calculate_match(&job, &candidate);

        candidate.salary_expectation = Some(4000.0);
        let with = calculate_match(&job, &candidate);

        assert!(with.overall_score >= without.overall_score);
    }

    #[test]
    fn alternate_weights_change_the_composite() {
        let weights = Weights {
            skills: 1.0,
            experience: 0.0,
            education: 0.0,
            language: 0.0,
            salary: 0.0,
        };
        let engine = ScoringEngine::new(MatchConfig { weights });

        let mut candidate = full_candidate();
        candidate.education.clear();
        let result = engine.score(&full_job(), &candidate);

        assert_eq!(result.overall_score, 100);
    }

    #[test]
    fn weak_dimensions_surface_recommendations_in_order() {
        let job = full_job();
        let candidate = CandidateProfile {
            skills: vec![CandidateSkill::named("cooking")],
            experience_level: Some(ExperienceLevel::Executive),
            salary_expectation: Some(9000.0),
            ..CandidateProfile::default()
        };

        let result = calculate_match(&job, &candidate);

        assert!(result.recommendations[0].starts_with("Develop skills in: Customer Service"));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("cabin-crew roles")));
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("Improve language skills: English")));
        assert!(result
            .recommendations
            .last()
            .unwrap()
            .starts_with("Consider adjusting salary"));
    }
}
