use admissions::candidates::{
    connect_pool, CandidateService, SqlCandidateRepository, Verdict,
};
use admissions::config::DatabaseConfig;
use admissions::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Open the configured store, make sure the `persona` table exists, and wrap it in a service.
pub(crate) async fn open_candidate_service(
    config: &DatabaseConfig,
) -> Result<Arc<CandidateService<SqlCandidateRepository>>, AppError> {
    let pool = connect_pool(&config.url, config.max_connections).await?;
    let repository = SqlCandidateRepository::new(pool);
    repository.ensure_schema().await?;

    info!(url = %config.url, max_connections = config.max_connections, "candidate store ready");
    Ok(Arc::new(CandidateService::new(Arc::new(repository))))
}

pub(crate) fn parse_verdict(raw: &str) -> Result<Verdict, String> {
    Verdict::from_label(raw.trim())
        .ok_or_else(|| format!("'{raw}' is not a verdict; expected SI or NO"))
}
