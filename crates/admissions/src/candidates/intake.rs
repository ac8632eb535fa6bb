use serde::Deserialize;
use serde_json::Value;

use super::domain::{CandidateSubmission, Faculty, NationalId};

/// Validation errors raised before a submission reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("score must be a whole number (found '{0}')")]
    NonNumericScore(String),
    #[error("unrecognized faculty '{0}'; expected one of Ingenieria, Artes, Tecnologica, Medio_Ambiente, Ciencias")]
    UnrecognizedFaculty(String),
}

/// Submission fields after trimming and type checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCandidate {
    pub national_id: NationalId,
    pub first_name: String,
    pub last_name: String,
    pub faculty: Faculty,
    pub score: i32,
}

/// Convert raw form values into typed candidate fields.
pub fn validate(submission: &CandidateSubmission) -> Result<ValidatedCandidate, IntakeError> {
    let national_id = required("national_id", &submission.national_id)?;
    let first_name = required("first_name", &submission.first_name)?;
    let last_name = required("last_name", &submission.last_name)?;
    let faculty_name = required("faculty", &submission.faculty)?;
    let raw_score = required("score", &submission.score)?;

    let score = raw_score
        .parse::<i32>()
        .map_err(|_| IntakeError::NonNumericScore(raw_score.to_string()))?;

    let faculty = Faculty::from_label(faculty_name)
        .ok_or_else(|| IntakeError::UnrecognizedFaculty(faculty_name.to_string()))?;

    Ok(ValidatedCandidate {
        national_id: NationalId(national_id.to_string()),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        faculty,
        score,
    })
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, IntakeError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(IntakeError::MissingField(field))
    } else {
        Ok(trimmed)
    }
}

/// Accept any JSON value as the score, keeping it raw for [`validate`].
///
/// `null` becomes empty; numbers and other values keep their JSON text.
pub(crate) fn deserialize_raw_score<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}
