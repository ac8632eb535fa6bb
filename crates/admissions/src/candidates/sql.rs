//! SQLite-backed candidate store.
//!
//! Records live in the `persona` table. Column order on read is fixed:
//! `idPersona, dni, nombre, apellido, facultad, puntaje, admitido`.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::debug;

use super::domain::{CandidateId, CandidateRecord, Faculty, NationalId, Verdict};
use super::repository::{CandidateRepository, RepositoryError};

const CREATE_PERSONA_TABLE: &str = "CREATE TABLE IF NOT EXISTS persona (
    idPersona INTEGER PRIMARY KEY AUTOINCREMENT,
    dni TEXT NOT NULL UNIQUE,
    nombre TEXT NOT NULL,
    apellido TEXT NOT NULL,
    facultad TEXT NOT NULL,
    puntaje INTEGER NOT NULL,
    admitido TEXT NOT NULL CHECK (admitido IN ('SI', 'NO'))
)";

const INSERT_PERSONA: &str = "INSERT INTO persona (dni, nombre, apellido, facultad, puntaje, admitido) \
     VALUES (?, ?, ?, ?, ?, ?)";

const SELECT_ALL: &str = "SELECT idPersona, dni, nombre, apellido, facultad, puntaje, admitido \
     FROM persona ORDER BY idPersona";

const SELECT_BY_DNI: &str = "SELECT idPersona, dni, nombre, apellido, facultad, puntaje, admitido \
     FROM persona WHERE dni = ? ORDER BY idPersona LIMIT 1";

const UPDATE_BY_ID: &str = "UPDATE persona SET dni = ?, nombre = ?, apellido = ?, facultad = ?, \
     puntaje = ?, admitido = ? WHERE idPersona = ?";

const DELETE_BY_DNI: &str = "DELETE FROM persona WHERE dni = ?";

/// Open a pool for the given SQLite URL, creating the database file when missing.
///
/// In-memory databases are private to a single connection, so the pool is pinned
/// to one long-lived connection in that case.
pub async fn connect_pool(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool = if url.contains(":memory:") || url.contains("mode=memory") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?
    };

    Ok(pool)
}

#[derive(Debug, FromRow)]
struct PersonaRow {
    #[sqlx(rename = "idPersona")]
    id_persona: i64,
    dni: String,
    nombre: String,
    apellido: String,
    facultad: String,
    puntaje: i32,
    admitido: String,
}

impl TryFrom<PersonaRow> for CandidateRecord {
    type Error = RepositoryError;

    fn try_from(row: PersonaRow) -> Result<Self, Self::Error> {
        let faculty = Faculty::from_label(&row.facultad).ok_or_else(|| {
            RepositoryError::Corrupt(format!(
                "row {} has unknown faculty '{}'",
                row.id_persona, row.facultad
            ))
        })?;
        let admitted = Verdict::from_label(&row.admitido).ok_or_else(|| {
            RepositoryError::Corrupt(format!(
                "row {} has verdict '{}'",
                row.id_persona, row.admitido
            ))
        })?;

        Ok(CandidateRecord {
            id: Some(CandidateId(row.id_persona)),
            national_id: NationalId(row.dni),
            first_name: row.nombre,
            last_name: row.apellido,
            faculty,
            score: row.puntaje,
            admitted,
        })
    }
}

/// Candidate store over an injected SQLite pool.
///
/// Every call checks a connection out of the pool for a single statement and
/// returns it before resolving.
#[derive(Debug, Clone)]
pub struct SqlCandidateRepository {
    pool: SqlitePool,
}

impl SqlCandidateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `persona` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_PERSONA_TABLE)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl CandidateRepository for SqlCandidateRepository {
    async fn insert(&self, record: CandidateRecord) -> Result<CandidateRecord, RepositoryError> {
        let result = sqlx::query(INSERT_PERSONA)
            .bind(record.national_id.as_str())
            .bind(record.first_name.as_str())
            .bind(record.last_name.as_str())
            .bind(record.faculty.label())
            .bind(record.score)
            .bind(record.admitted.label())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Unavailable(
                "insert did not store a row".to_string(),
            ));
        }

        Ok(CandidateRecord {
            id: Some(CandidateId(result.last_insert_rowid())),
            ..record
        })
    }

    async fn list_all(&self) -> Result<Vec<CandidateRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, PersonaRow>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(CandidateRecord::try_from).collect()
    }

    async fn find_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<Option<CandidateRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, PersonaRow>(SELECT_BY_DNI)
            .bind(national_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(CandidateRecord::try_from).transpose()
    }

    async fn update(&self, record: CandidateRecord) -> Result<(), RepositoryError> {
        let Some(id) = record.id else {
            return Err(RepositoryError::NotFound);
        };

        let result = sqlx::query(UPDATE_BY_ID)
            .bind(record.national_id.as_str())
            .bind(record.first_name.as_str())
            .bind(record.last_name.as_str())
            .bind(record.faculty.label())
            .bind(record.score)
            .bind(record.admitted.label())
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_national_id(
        &self,
        national_id: &NationalId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(DELETE_BY_DNI)
            .bind(national_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    debug!(%error, "sqlite operation failed");

    match error {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Conflict,
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        error @ (sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_)) => {
            RepositoryError::Corrupt(error.to_string())
        }
        other => RepositoryError::Unavailable(other.to_string()),
    }
}
