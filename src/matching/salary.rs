use crate::SalaryRange;

/// Neutral score when either side gives no salary information. Deliberately
/// not 0 or 1 so incomplete profiles are neither punished nor favored.
pub const NEUTRAL_SALARY_SCORE: f64 = 0.5;

/// Relative distance between the posting's midpoint and the candidate's
/// expectation: equal to the midpoint scores 1.0, twice the midpoint (or
/// zero) scores 0.0, clamped below.
pub fn match_salary(job_salary: Option<SalaryRange>, expectation: Option<f64>) -> f64 {
    let (Some(range), Some(expected)) = (job_salary, expectation) else {
        return NEUTRAL_SALARY_SCORE;
    };

    let midpoint = (range.min + range.max) / 2.0;
    if midpoint <= 0.0 {
        // A zero-width zero range carries no signal; treat like absent data.
        return NEUTRAL_SALARY_SCORE;
    }

    (1.0 - (midpoint - expected).abs() / midpoint).max(0.0)
}
