//! Candidate admission records: intake, the per-faculty admission rule, storage, and HTTP routes.

pub mod domain;
pub mod evaluation;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;
pub mod sql;

#[cfg(test)]
mod tests;

pub use domain::{CandidateId, CandidateRecord, CandidateSubmission, Faculty, NationalId, Verdict};
pub use evaluation::{evaluate, minimum_score, AdmissionOutcome};
pub use intake::{IntakeError, ValidatedCandidate};
pub use repository::{CandidateRepository, RepositoryError};
pub use router::candidate_router;
pub use service::{CandidateService, CandidateServiceError, CandidateUpdate};
pub use sql::{connect_pool, SqlCandidateRepository};
