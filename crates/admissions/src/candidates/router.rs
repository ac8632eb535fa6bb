use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::domain::{CandidateId, CandidateSubmission, NationalId};
use super::repository::CandidateRepository;
use super::service::CandidateService;
use crate::error::AppError;

/// Router builder exposing HTTP endpoints for candidate records.
pub fn candidate_router<R>(service: Arc<CandidateService<R>>) -> Router
where
    R: CandidateRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/candidates",
            get(list_handler::<R>).post(register_handler::<R>),
        )
        // GET/DELETE address the national id; PUT addresses the store-assigned id.
        .route(
            "/api/v1/candidates/:key",
            get(find_handler::<R>)
                .put(update_handler::<R>)
                .delete(remove_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    Json(submission): Json<CandidateSubmission>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.register(submission).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<CandidateService<R>>>) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.list().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn find_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    Path(national_id): Path<String>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.find(&NationalId(national_id)).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    Path(id): Path<i64>,
    Json(submission): Json<CandidateSubmission>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.revise(CandidateId(id), submission).await {
        Ok(update) => (StatusCode::OK, Json(update)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn remove_handler<R>(
    State(service): State<Arc<CandidateService<R>>>,
    Path(national_id): Path<String>,
) -> Response
where
    R: CandidateRepository + 'static,
{
    match service.remove(&NationalId(national_id)).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}
