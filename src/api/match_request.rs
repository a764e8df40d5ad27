use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::levels::ExperienceLevel;
use crate::matching::JobFilters;

const DEFAULT_PAGE_SIZE: usize = 10;
const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Error, PartialEq)]
pub enum FilterParseError {
    #[error("unknown experience level: {0}")]
    UnknownExperienceLevel(String),
}

/// Search parameters as the HTTP boundary receives them. Typed filter
/// construction happens in [`JobSearchQuery::filters`]; pagination stays
/// here because slicing the ranked list is the caller's job.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSearchQuery {
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub min_salary: Option<f64>,
    pub experience: Option<String>,
    pub remote: Option<bool>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl JobSearchQuery {
    pub fn filters(&self) -> Result<JobFilters, FilterParseError> {
        let experience_level = self
            .experience
            .as_deref()
            .map(|raw| {
                ExperienceLevel::from_str(raw)
                    .map_err(|_| FilterParseError::UnknownExperienceLevel(raw.to_string()))
            })
            .transpose()?;

        Ok(JobFilters {
            category: self.category.clone(),
            job_type: self.job_type.clone(),
            location: self.location.clone(),
            min_salary: self.min_salary,
            experience_level,
            remote: self.remote,
        })
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> usize {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    /// Offset into the ranked list for the requested page.
    pub fn skip(&self) -> usize {
        (self.page() - 1) * self.per_page()
    }
}
