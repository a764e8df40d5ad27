use crate::levels::ExperienceLevel;
use crate::JobPosting;

/// Caller-supplied search criteria. Every present field must hold for a job
/// to be retained; absent fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub location: Option<String>,
    pub min_salary: Option<f64>,
    pub experience_level: Option<ExperienceLevel>,
    pub remote: Option<bool>,
}

impl JobFilters {
    pub fn matches(&self, job: &JobPosting) -> bool {
        if let Some(category) = &self.category {
            if job.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(job_type) = &self.job_type {
            if job.job_type.as_deref() != Some(job_type.as_str()) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            // Substring match, case-insensitive: "paris" finds "Paris, France".
            let needle = location.to_lowercase();
            match &job.location {
                Some(have) if have.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }
        if let Some(min_salary) = self.min_salary {
            // A posting without a published range cannot prove it pays enough.
            match job.salary {
                Some(range) if range.max >= min_salary => {}
                _ => return false,
            }
        }
        if let Some(level) = self.experience_level {
            if job.experience_level != Some(level) {
                return false;
            }
        }
        if let Some(remote) = self.remote {
            if job.is_remote != remote {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SalaryRange;

    fn base_job() -> JobPosting {
        JobPosting {
            category: Some("cabin-crew".into()),
            job_type: Some("full-time".into()),
            location: Some("Paris, France".into()),
            is_remote: false,
            experience_level: Some(ExperienceLevel::Mid),
            salary: Some(SalaryRange {
                min: 3000.0,
                max: 5000.0,
            }),
            is_active: true,
            ..JobPosting::default()
        }
    }

    #[test]
    fn empty_filters_retain_everything() {
        assert!(JobFilters::default().matches(&base_job()));
    }

    #[test]
    fn category_and_type_match_exactly() {
        let filters = JobFilters {
            category: Some("cabin-crew".into()),
            job_type: Some("part-time".into()),
            ..JobFilters::default()
        };
        assert!(!filters.matches(&base_job()));
    }

    #[test]
    fn location_is_a_case_insensitive_substring() {
        let filters = JobFilters {
            location: Some("paris".into()),
            ..JobFilters::default()
        };
        assert!(filters.matches(&base_job()));

        let elsewhere = JobFilters {
            location: Some("tokyo".into()),
            ..JobFilters::default()
        };
        assert!(!elsewhere.matches(&base_job()));
    }

    #[test]
    fn min_salary_checks_the_range_maximum() {
        let filters = JobFilters {
            min_salary: Some(4500.0),
            ..JobFilters::default()
        };
        assert!(filters.matches(&base_job()));

        let too_high = JobFilters {
            min_salary: Some(6000.0),
            ..JobFilters::default()
        };
        assert!(!too_high.matches(&base_job()));
    }

    #[test]
    fn jobs_missing_a_filtered_field_are_rejected() {
        let mut job = base_job();
        job.salary = None;
        job.category = None;

        let by_salary = JobFilters {
            min_salary: Some(1000.0),
            ..JobFilters::default()
        };
        assert!(!by_salary.matches(&job));

        let by_category = JobFilters {
            category: Some("pilot".into()),
            ..JobFilters::default()
        };
        assert!(!by_category.matches(&job));
    }

    #[test]
    fn remote_filter_matches_the_flag() {
        let filters = JobFilters {
            remote: Some(true),
            ..JobFilters::default()
        };
        assert!(!filters.matches(&base_job()));

        let mut remote_job = base_job();
        remote_job.is_remote = true;
        assert!(filters.matches(&remote_job));
    }
}
