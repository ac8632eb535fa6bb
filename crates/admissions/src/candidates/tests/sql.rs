use super::common::sqlite_repository;
use crate::candidates::domain::{CandidateId, CandidateRecord, Faculty, NationalId, Verdict};
use crate::candidates::repository::{CandidateRepository, RepositoryError};

fn record(national_id: &str, faculty: Faculty, score: i32) -> CandidateRecord {
    CandidateRecord {
        id: None,
        national_id: NationalId(national_id.to_string()),
        first_name: "Luis".to_string(),
        last_name: "Mamani".to_string(),
        faculty,
        score,
        admitted: faculty.verdict(score),
    }
}

#[tokio::test]
async fn insert_then_find_round_trips_every_field() {
    let repository = sqlite_repository().await;
    let original = record("123", Faculty::MedioAmbiente, 300);

    let stored = repository
        .insert(original.clone())
        .await
        .expect("insert succeeds");
    let found = repository
        .find_by_national_id(&original.national_id)
        .await
        .expect("query succeeds")
        .expect("record present");

    assert!(stored.id.is_some());
    assert_eq!(found, stored);
    assert_eq!(CandidateRecord { id: None, ..found }, original);
}

#[tokio::test]
async fn insert_rejects_duplicate_national_id() {
    let repository = sqlite_repository().await;
    repository
        .insert(record("123", Faculty::Artes, 350))
        .await
        .expect("first insert succeeds");

    let error = repository
        .insert(record("123", Faculty::Ciencias, 10))
        .await
        .expect_err("duplicate rejected");

    assert!(matches!(error, RepositoryError::Conflict));
    assert_eq!(repository.list_all().await.expect("list").len(), 1);
}

#[tokio::test]
async fn list_all_returns_rows_in_key_order() {
    let repository = sqlite_repository().await;
    for (dni, score) in [("b", 100), ("a", 400), ("c", 320)] {
        repository
            .insert(record(dni, Faculty::Ciencias, score))
            .await
            .expect("insert succeeds");
    }

    let records = repository.list_all().await.expect("list succeeds");

    let ids: Vec<&str> = records
        .iter()
        .map(|record| record.national_id.as_str())
        .collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
    assert_eq!(records[2].admitted, Verdict::Admitted);
}

#[tokio::test]
async fn find_missing_national_id_returns_none() {
    let repository = sqlite_repository().await;

    let found = repository
        .find_by_national_id(&NationalId("999".to_string()))
        .await
        .expect("query succeeds");

    assert!(found.is_none());
}

#[tokio::test]
async fn update_matches_on_id_and_may_change_national_id() {
    let repository = sqlite_repository().await;
    let stored = repository
        .insert(record("123", Faculty::Ingenieria, 300))
        .await
        .expect("insert succeeds");

    let revised = CandidateRecord {
        national_id: NationalId("321".to_string()),
        score: 360,
        admitted: Verdict::Admitted,
        ..stored.clone()
    };
    repository
        .update(revised.clone())
        .await
        .expect("update succeeds");

    assert!(repository
        .find_by_national_id(&NationalId("123".to_string()))
        .await
        .expect("query succeeds")
        .is_none());
    let found = repository
        .find_by_national_id(&NationalId("321".to_string()))
        .await
        .expect("query succeeds")
        .expect("record present");
    assert_eq!(found, revised);
}

#[tokio::test]
async fn update_unknown_or_unsaved_record_is_not_found() {
    let repository = sqlite_repository().await;

    let unsaved = record("123", Faculty::Artes, 10);
    assert!(matches!(
        repository.update(unsaved.clone()).await,
        Err(RepositoryError::NotFound)
    ));

    let unknown = CandidateRecord {
        id: Some(CandidateId(99)),
        ..unsaved
    };
    assert!(matches!(
        repository.update(unknown).await,
        Err(RepositoryError::NotFound)
    ));
}

#[tokio::test]
async fn delete_missing_national_id_is_not_found() {
    let repository = sqlite_repository().await;
    repository
        .insert(record("123", Faculty::Artes, 400))
        .await
        .expect("insert succeeds");

    repository
        .delete_by_national_id(&NationalId("123".to_string()))
        .await
        .expect("delete succeeds");
    let again = repository
        .delete_by_national_id(&NationalId("123".to_string()))
        .await;

    assert!(matches!(again, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let repository = sqlite_repository().await;

    repository
        .ensure_schema()
        .await
        .expect("second schema pass succeeds");
}

#[tokio::test]
async fn foreign_verdict_values_are_rejected_by_the_table() {
    let repository = sqlite_repository().await;

    let result = sqlx::query(
        "INSERT INTO persona (dni, nombre, apellido, facultad, puntaje, admitido) \
         VALUES ('1', 'a', 'b', 'Artes', 1, '')",
    )
    .execute(repository.pool())
    .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn unknown_stored_faculty_surfaces_as_corrupt() {
    let repository = sqlite_repository().await;
    sqlx::query(
        "INSERT INTO persona (dni, nombre, apellido, facultad, puntaje, admitido) \
         VALUES ('7', 'a', 'b', 'Medicina', 1, 'NO')",
    )
    .execute(repository.pool())
    .await
    .expect("raw insert succeeds");

    let result = repository
        .find_by_national_id(&NationalId("7".to_string()))
        .await;

    assert!(matches!(result, Err(RepositoryError::Corrupt(_))));
}

#[tokio::test]
async fn update_rejects_national_id_held_by_another_record() {
    let repository = sqlite_repository().await;
    let first = repository
        .insert(record("1", Faculty::Artes, 360))
        .await
        .expect("insert succeeds");
    repository
        .insert(record("2", Faculty::Ciencias, 100))
        .await
        .expect("insert succeeds");

    let clash = CandidateRecord {
        national_id: NationalId("2".to_string()),
        ..first.clone()
    };
    let error = repository
        .update(clash)
        .await
        .expect_err("duplicate national id rejected");

    assert!(matches!(error, RepositoryError::Conflict));
    let unchanged = repository
        .find_by_national_id(&NationalId("1".to_string()))
        .await
        .expect("query succeeds")
        .expect("record present");
    assert_eq!(unchanged, first);
}
