use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Experience seniority ladder used by both job postings and profiles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    /// Ordinal rank for distance-based scoring.
    pub fn rank(self) -> u8 {
        match self {
            ExperienceLevel::Entry => 1,
            ExperienceLevel::Mid => 2,
            ExperienceLevel::Senior => 3,
            ExperienceLevel::Executive => 4,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LanguageProficiency {
    Basic,
    Intermediate,
    Fluent,
    Native,
}

impl LanguageProficiency {
    pub fn rank(self) -> u8 {
        match self {
            LanguageProficiency::Basic => 1,
            LanguageProficiency::Intermediate => 2,
            LanguageProficiency::Fluent => 3,
            LanguageProficiency::Native => 4,
        }
    }
}

/// Self-assessed skill level on a candidate profile. Not an input to any
/// sub-score today; kept for wire compatibility with the profile service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}
