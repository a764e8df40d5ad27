use crate::JobPosting;

use super::scoring::ScoreBreakdown;

const SKILLS_THRESHOLD: f64 = 0.7;
const EXPERIENCE_THRESHOLD: f64 = 0.6;
const LANGUAGE_THRESHOLD: f64 = 0.8;
const SALARY_THRESHOLD: f64 = 0.5;

/// How many missing skills to surface in the skills suggestion.
const SUGGESTED_SKILLS_LIMIT: usize = 3;

/// Improvement suggestions derived from weak sub-scores. Evaluated in a fixed
/// order (skills, experience, language, salary) with at most one message per
/// dimension; dimensions above threshold contribute nothing.
pub fn build(
    job: &JobPosting,
    breakdown: &ScoreBreakdown,
    missing_skills: &[String],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if breakdown.skills < SKILLS_THRESHOLD && !missing_skills.is_empty() {
        let top: Vec<&str> = missing_skills
            .iter()
            .take(SUGGESTED_SKILLS_LIMIT)
            .map(String::as_str)
            .collect();
        recommendations.push(format!("Develop skills in: {}", top.join(", ")));
    }

    if breakdown.experience < EXPERIENCE_THRESHOLD {
        let roles = job.category.as_deref().unwrap_or("similar");
        recommendations.push(format!("Gain more experience in {roles} roles"));
    }

    if breakdown.language < LANGUAGE_THRESHOLD && !job.language_requirements.is_empty() {
        let languages: Vec<&str> = job
            .language_requirements
            .iter()
            .map(|requirement| requirement.language.as_str())
            .collect();
        recommendations.push(format!("Improve language skills: {}", languages.join(", ")));
    }

    if breakdown.salary < SALARY_THRESHOLD {
        recommendations.push(
            "Consider adjusting salary expectations or developing higher-value skills".to_string(),
        );
    }

    recommendations
}
