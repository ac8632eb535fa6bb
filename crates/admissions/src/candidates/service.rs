use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::domain::{CandidateId, CandidateRecord, CandidateSubmission, NationalId};
use super::intake::{self, IntakeError};
use super::repository::{CandidateRepository, RepositoryError};

/// Service composing intake validation, the admission rule, and the store.
pub struct CandidateService<R> {
    repository: Arc<R>,
}

/// Result of an update: the stored record and whether the verdict moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateUpdate {
    pub record: CandidateRecord,
    /// The caller-supplied verdict disagreed with the one recomputed from faculty and score.
    pub verdict_changed: bool,
}

impl<R> CandidateService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate raw fields, decide admission, and store the new candidate.
    pub async fn register(
        &self,
        submission: CandidateSubmission,
    ) -> Result<CandidateRecord, CandidateServiceError> {
        let candidate = intake::validate(&submission)?;
        let admitted = candidate.faculty.verdict(candidate.score);

        let record = CandidateRecord {
            id: None,
            national_id: candidate.national_id,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            faculty: candidate.faculty,
            score: candidate.score,
            admitted,
        };

        let stored = self.repository.insert(record).await.map_err(|error| {
            warn!(%error, "candidate registration rejected by store");
            error
        })?;

        info!(
            id = ?stored.id,
            faculty = %stored.faculty,
            admitted = %stored.admitted,
            "candidate registered"
        );
        Ok(stored)
    }

    pub async fn list(&self) -> Result<Vec<CandidateRecord>, CandidateServiceError> {
        Ok(self.repository.list_all().await?)
    }

    pub async fn find(
        &self,
        national_id: &NationalId,
    ) -> Result<CandidateRecord, CandidateServiceError> {
        self.repository
            .find_by_national_id(national_id)
            .await?
            .ok_or_else(|| CandidateServiceError::NotFound(national_id.clone()))
    }

    /// Persist a revised record, recomputing its verdict from faculty and score.
    pub async fn update(
        &self,
        record: CandidateRecord,
    ) -> Result<CandidateUpdate, CandidateServiceError> {
        let Some(id) = record.id else {
            return Err(CandidateServiceError::MissingId);
        };

        let supplied = record.admitted;
        let admitted = record.faculty.verdict(record.score);
        let verdict_changed = supplied != admitted;
        if verdict_changed {
            warn!(
                %id,
                supplied = %supplied,
                recomputed = %admitted,
                "supplied verdict disagrees with faculty threshold; storing recomputed verdict"
            );
        }

        let record = CandidateRecord { admitted, ..record };
        match self.repository.update(record.clone()).await {
            Ok(()) => Ok(CandidateUpdate {
                record,
                verdict_changed,
            }),
            Err(RepositoryError::NotFound) => Err(CandidateServiceError::UnknownId(id)),
            Err(other) => Err(other.into()),
        }
    }

    /// Validate raw fields and apply them to the candidate stored under `id`.
    ///
    /// When the submission carries no verdict the recomputed one is taken as given.
    pub async fn revise(
        &self,
        id: CandidateId,
        submission: CandidateSubmission,
    ) -> Result<CandidateUpdate, CandidateServiceError> {
        let candidate = intake::validate(&submission)?;
        let recomputed = candidate.faculty.verdict(candidate.score);

        self.update(CandidateRecord {
            id: Some(id),
            national_id: candidate.national_id,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            faculty: candidate.faculty,
            score: candidate.score,
            admitted: submission.admitted.unwrap_or(recomputed),
        })
        .await
    }

    pub async fn remove(&self, national_id: &NationalId) -> Result<(), CandidateServiceError> {
        match self.repository.delete_by_national_id(national_id).await {
            Ok(()) => {
                info!(national_id = %national_id, "candidate removed");
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                Err(CandidateServiceError::NotFound(national_id.clone()))
            }
            Err(other) => Err(other.into()),
        }
    }
}

/// Error raised by the candidate service. `Display` is suitable for operators.
#[derive(Debug, thiserror::Error)]
pub enum CandidateServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error("no candidate with national id {0}")]
    NotFound(NationalId),
    #[error("no candidate with id {0}")]
    UnknownId(CandidateId),
    #[error("candidate record has no id; register it before updating")]
    MissingId,
    #[error("a candidate with that national id is already registered")]
    Duplicate,
    #[error("candidate store error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for CandidateServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Conflict => Self::Duplicate,
            other => Self::Repository(other),
        }
    }
}
