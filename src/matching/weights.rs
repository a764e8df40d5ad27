/// Default dimension weights for the composite score.
/// Skills dominate; salary and language are soft signals.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills: 0.40,
    experience: 0.25,
    education: 0.15,
    language: 0.10,
    salary: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub language: f64,
    pub salary: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.language + self.salary
    }
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
