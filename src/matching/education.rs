/// Placeholder fit for a candidate that has any education history against a
/// job that requires some. Semantic comparison of degree level and field
/// belongs to a future comparator; replacing this constant must not require
/// touching the composer.
pub const PARTIAL_EDUCATION_SCORE: f64 = 0.7;

pub fn match_education(requirements: &[String], education: &[String]) -> f64 {
    if requirements.is_empty() {
        return 1.0;
    }
    if education.is_empty() {
        return 0.0;
    }
    PARTIAL_EDUCATION_SCORE
}
