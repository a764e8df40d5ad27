pub mod api;
pub mod levels;
pub mod logging;
pub mod matching;

use serde::{Deserialize, Serialize};

use levels::{ExperienceLevel, LanguageProficiency, SkillLevel};

// Core data models shared by the scoring and ranking functions. Field names
// follow the platform's camelCase wire format; collection fields default to
// empty so structurally incomplete payloads still score.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub is_remote: bool,
    pub skills: Vec<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub education_requirements: Vec<String>,
    pub language_requirements: Vec<LanguageRequirement>,
    pub salary: Option<SalaryRange>,
    pub is_active: bool,
}

impl Default for JobPosting {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            category: None,
            job_type: None,
            location: None,
            is_remote: false,
            skills: vec![],
            experience_level: None,
            education_requirements: vec![],
            language_requirements: vec![],
            salary: None,
            // Postings are live unless the job collaborator says otherwise.
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageRequirement {
    pub language: String,
    pub proficiency: LanguageProficiency,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    pub skills: Vec<CandidateSkill>,
    pub experience_level: Option<ExperienceLevel>,
    pub education: Vec<String>,
    pub languages: Vec<LanguageRequirement>,
    pub salary_expectation: Option<f64>,
}

/// One skill on a candidate profile. The scorer matches by `name` only;
/// `level` is carried for the profile collaborator's benefit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSkill {
    pub name: String,
    #[serde(default)]
    pub level: Option<SkillLevel>,
}

impl CandidateSkill {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
        }
    }
}
