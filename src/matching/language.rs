use crate::LanguageRequirement;

/// Fraction of required languages the candidate satisfies. A requirement is
/// satisfied iff the candidate lists the language (case-insensitive) at a
/// proficiency rank at or above the required one.
pub fn match_languages(
    required: &[LanguageRequirement],
    candidate: &[LanguageRequirement],
) -> f64 {
    if required.is_empty() {
        return 1.0;
    }
    if candidate.is_empty() {
        return 0.0;
    }

    let satisfied = required
        .iter()
        .filter(|requirement| {
            candidate.iter().any(|have| {
                have.language.eq_ignore_ascii_case(&requirement.language)
                    && have.proficiency.rank() >= requirement.proficiency.rank()
            })
        })
        .count();

    satisfied as f64 / required.len() as f64
}
