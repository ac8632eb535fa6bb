use async_trait::async_trait;

use super::domain::{CandidateRecord, NationalId};

/// Storage abstraction so the service module can be exercised in isolation.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Persist a new record, returning it with the store-assigned id.
    async fn insert(&self, record: CandidateRecord) -> Result<CandidateRecord, RepositoryError>;

    async fn list_all(&self) -> Result<Vec<CandidateRecord>, RepositoryError>;

    /// First record carrying the national id, if any.
    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<CandidateRecord>, RepositoryError>;

    /// Overwrite every mutable field of the record matching `record.id`.
    async fn update(&self, record: CandidateRecord) -> Result<(), RepositoryError>;

    async fn delete_by_national_id(&self, national_id: &NationalId)
        -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("stored record is malformed: {0}")]
    Corrupt(String),
}
