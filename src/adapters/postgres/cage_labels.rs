//! Cage label registry writes.
//!
//! Called inside the record's transaction. The primary key on
//! `cage_labels.label` is what makes allocation safe under concurrency.

use sqlx::postgres::PgQueryResult;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::domain::colony::HousingKind;
use crate::domain::foundation::DomainError;

pub(super) async fn claim(
    tx: &mut Transaction<'_, Postgres>,
    label: &str,
    kind: HousingKind,
    holder: &Uuid,
) -> Result<(), DomainError> {
    let result = sqlx::query(
        "INSERT INTO cage_labels (label, holder_kind, holder_id) VALUES ($1, $2, $3)",
    )
    .bind(label)
    .bind(kind.as_str())
    .bind(holder)
    .execute(&mut **tx)
    .await;

    label_write(result, label)
}

/// Point the holder's registration at `label`. A no-op when unchanged.
pub(super) async fn move_to(
    tx: &mut Transaction<'_, Postgres>,
    label: &str,
    holder: &Uuid,
) -> Result<(), DomainError> {
    let result = sqlx::query("UPDATE cage_labels SET label = $2 WHERE holder_id = $1")
        .bind(holder)
        .bind(label)
        .execute(&mut **tx)
        .await;

    label_write(result, label)
}

pub(super) async fn release(
    tx: &mut Transaction<'_, Postgres>,
    holder: &Uuid,
) -> Result<(), DomainError> {
    sqlx::query("DELETE FROM cage_labels WHERE holder_id = $1")
        .bind(holder)
        .execute(&mut **tx)
        .await
        .map_err(|e| DomainError::database("Failed to release cage label", e))?;
    Ok(())
}

fn label_write(result: Result<PgQueryResult, sqlx::Error>, label: &str) -> Result<(), DomainError> {
    match result {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!(label, "Cage label registration collided");
            Err(DomainError::cage_label_conflict(label))
        }
        Err(e) => Err(DomainError::database("Failed to register cage label", e)),
    }
}
