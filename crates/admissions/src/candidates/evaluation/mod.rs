mod thresholds;

pub use thresholds::minimum_score;

use super::domain::{Faculty, Verdict};
use serde::{Deserialize, Serialize};

/// Result of running the admission rule against a raw faculty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum AdmissionOutcome {
    Decided(Verdict),
    UnrecognizedFaculty(String),
}

impl AdmissionOutcome {
    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            AdmissionOutcome::Decided(verdict) => Some(*verdict),
            AdmissionOutcome::UnrecognizedFaculty(_) => None,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            AdmissionOutcome::Decided(Verdict::Admitted) => "admitted".to_string(),
            AdmissionOutcome::Decided(Verdict::Rejected) => "not admitted".to_string(),
            AdmissionOutcome::UnrecognizedFaculty(name) => {
                format!("unrecognized faculty '{name}'")
            }
        }
    }
}

impl Faculty {
    pub fn minimum_score(&self) -> i32 {
        minimum_score(*self)
    }

    /// Scores below the faculty minimum are rejected; the minimum itself admits.
    pub fn verdict(&self, score: i32) -> Verdict {
        if score < self.minimum_score() {
            Verdict::Rejected
        } else {
            Verdict::Admitted
        }
    }
}

/// Apply the per-faculty threshold to a faculty name as typed by the caller.
pub fn evaluate(faculty: &str, score: i32) -> AdmissionOutcome {
    match Faculty::from_label(faculty) {
        Some(faculty) => AdmissionOutcome::Decided(faculty.verdict(score)),
        None => AdmissionOutcome::UnrecognizedFaculty(faculty.to_string()),
    }
}
