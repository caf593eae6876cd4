//! PostgreSQL implementation of ObservationRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows;
use crate::domain::colony::Observation;
use crate::domain::foundation::{DomainError, ErrorCode, WeanedGroupId};
use crate::ports::ObservationRepository;

#[derive(Clone)]
pub struct PostgresObservationRepository {
    pool: PgPool,
}

impl PostgresObservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ObservationRepository for PostgresObservationRepository {
    async fn save(&self, observation: &Observation) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO observations (id, weaned_group_id, note, recorded_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(observation.id().as_uuid())
        .bind(observation.weaned_group_id().as_uuid())
        .bind(observation.note())
        .bind(observation.recorded_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                let id = observation.weaned_group_id().to_string();
                Err(DomainError::new(
                    ErrorCode::WeanedGroupNotFound,
                    format!("Weaned group not found: {}", id),
                )
                .with_detail("id", id))
            }
            Err(e) => Err(DomainError::database("Failed to insert observation", e)),
        }
    }

    async fn list_for_group(
        &self,
        weaned_group_id: &WeanedGroupId,
    ) -> Result<Vec<Observation>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, weaned_group_id, note, recorded_at
            FROM observations
            WHERE weaned_group_id = $1
            ORDER BY recorded_at
            "#,
        )
        .bind(weaned_group_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list observations", e))?;

        rows.iter().map(rows::observation).collect()
    }
}
