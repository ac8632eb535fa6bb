use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned key for a persisted candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub i64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Externally issued identity document number supplied by the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NationalId(pub String);

impl NationalId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Academic programs accepting candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faculty {
    Ingenieria,
    Artes,
    Tecnologica,
    #[serde(rename = "Medio_Ambiente")]
    MedioAmbiente,
    Ciencias,
}

impl Faculty {
    pub const ALL: [Faculty; 5] = [
        Faculty::Ingenieria,
        Faculty::Artes,
        Faculty::Tecnologica,
        Faculty::MedioAmbiente,
        Faculty::Ciencias,
    ];

    /// Name used on forms, on the wire, and in the `facultad` column.
    pub fn label(&self) -> &'static str {
        match self {
            Faculty::Ingenieria => "Ingenieria",
            Faculty::Artes => "Artes",
            Faculty::Tecnologica => "Tecnologica",
            Faculty::MedioAmbiente => "Medio_Ambiente",
            Faculty::Ciencias => "Ciencias",
        }
    }

    /// Exact, case-sensitive match against [`Faculty::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|faculty| faculty.label() == label)
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Admission verdict. Persisted and serialized as `SI` / `NO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "SI")]
    Admitted,
    #[serde(rename = "NO")]
    Rejected,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Admitted => "SI",
            Verdict::Rejected => "NO",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "SI" => Some(Verdict::Admitted),
            "NO" => Some(Verdict::Rejected),
            _ => None,
        }
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self, Verdict::Admitted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One applicant's stored data plus the computed verdict.
///
/// `id` stays `None` until the store assigns it on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CandidateId>,
    pub national_id: NationalId,
    pub first_name: String,
    pub last_name: String,
    pub faculty: Faculty,
    pub score: i32,
    pub admitted: Verdict,
}

/// Raw form values as entered by an operator or posted by an API client.
///
/// Nothing here is trusted; see [`super::intake`] for validation. Absent fields
/// deserialize as empty so intake reports them like blank ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub faculty: String,
    #[serde(default, deserialize_with = "super::intake::deserialize_raw_score")]
    pub score: String,
    /// Verdict the caller believes applies; only consulted on update to flag drift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admitted: Option<Verdict>,
}
