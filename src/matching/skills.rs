use crate::CandidateSkill;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsMatch {
    /// Fraction of required job skills covered, in [0, 1].
    pub score: f64,
    pub matched: Vec<String>,
    /// Required skills with no candidate counterpart, in posting order.
    pub missing: Vec<String>,
}

impl SkillsMatch {
    fn full() -> Self {
        Self {
            score: 1.0,
            matched: vec![],
            missing: vec![],
        }
    }
}

/// Lenient skill coverage: a required skill counts as matched when any
/// candidate skill name contains it or is contained by it, compared
/// case-insensitively. Each required skill contributes at most once.
pub fn match_skills(job_skills: &[String], candidate_skills: &[CandidateSkill]) -> SkillsMatch {
    if job_skills.is_empty() {
        return SkillsMatch::full();
    }

    let candidate_names: Vec<String> = candidate_skills
        .iter()
        .map(|skill| skill.name.to_lowercase())
        .collect();

    if candidate_names.is_empty() {
        return SkillsMatch {
            score: 0.0,
            matched: vec![],
            missing: job_skills.to_vec(),
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for required in job_skills {
        let needle = required.to_lowercase();
        let covered = candidate_names
            .iter()
            .any(|have| have.contains(&needle) || needle.contains(have.as_str()));
        if covered {
            matched.push(required.clone());
        } else {
            missing.push(required.clone());
        }
    }

    SkillsMatch {
        score: matched.len() as f64 / job_skills.len() as f64,
        matched,
        missing,
    }
}
