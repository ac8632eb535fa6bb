use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::candidates::domain::{CandidateId, CandidateRecord, CandidateSubmission, NationalId};
use crate::candidates::repository::{CandidateRepository, RepositoryError};
use crate::candidates::sql::{connect_pool, SqlCandidateRepository};
use crate::candidates::{candidate_router, CandidateService};

pub(super) fn submission(
    national_id: &str,
    score: &str,
    faculty: &str,
) -> CandidateSubmission {
    CandidateSubmission {
        national_id: national_id.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Quispe".to_string(),
        faculty: faculty.to_string(),
        score: score.to_string(),
        admitted: None,
    }
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<Vec<CandidateRecord>>,
    next_id: Mutex<i64>,
}

impl MemoryRepository {
    pub(super) fn records(&self) -> Vec<CandidateRecord> {
        self.records.lock().expect("repository mutex poisoned").clone()
    }
}

#[async_trait]
impl CandidateRepository for MemoryRepository {
    async fn insert(&self, record: CandidateRecord) -> Result<CandidateRecord, RepositoryError> {
        let mut records = self.records.lock().expect("repository mutex poisoned");
        if records
            .iter()
            .any(|stored| stored.national_id == record.national_id)
        {
            return Err(RepositoryError::Conflict);
        }

        let mut next_id = self.next_id.lock().expect("sequence mutex poisoned");
        *next_id += 1;
        let stored = CandidateRecord {
            id: Some(CandidateId(*next_id)),
            ..record
        };
        records.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<CandidateRecord>, RepositoryError> {
        Ok(self.records())
    }

    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<CandidateRecord>, RepositoryError> {
        Ok(self
            .records()
            .into_iter()
            .find(|record| &record.national_id == national_id))
    }

    async fn update(&self, record: CandidateRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().expect("repository mutex poisoned");
        if records
            .iter()
            .any(|stored| stored.id != record.id && stored.national_id == record.national_id)
        {
            return Err(RepositoryError::Conflict);
        }

        match records.iter_mut().find(|stored| stored.id == record.id) {
            Some(stored) if record.id.is_some() => {
                *stored = record;
                Ok(())
            }
            _ => Err(RepositoryError::NotFound),
        }
    }

    async fn delete_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().expect("repository mutex poisoned");
        let before = records.len();
        records.retain(|record| &record.national_id != national_id);
        if records.len() == before {
            Err(RepositoryError::NotFound)
        } else {
            Ok(())
        }
    }
}

pub(super) struct UnavailableRepository;

#[async_trait]
impl CandidateRepository for UnavailableRepository {
    async fn insert(&self, _record: CandidateRecord) -> Result<CandidateRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<CandidateRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn find_by_national_id(
        &self,
        _national_id: &NationalId,
    ) -> Result<Option<CandidateRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn update(&self, _record: CandidateRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn delete_by_national_id(
        &self,
        _national_id: &NationalId,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn memory_service() -> (Arc<CandidateService<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(CandidateService::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: Arc<CandidateService<MemoryRepository>>) -> axum::Router {
    candidate_router(service)
}

pub(super) async fn sqlite_repository() -> SqlCandidateRepository {
    let pool = connect_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool opens");
    let repository = SqlCandidateRepository::new(pool);
    repository.ensure_schema().await.expect("schema created");
    repository
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
