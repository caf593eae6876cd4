//! PostgreSQL implementation of LitterRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::rows;
use crate::domain::colony::{Litter, Sex};
use crate::domain::foundation::{BreedingPairId, DomainError, ErrorCode, LitterId};
use crate::ports::LitterRepository;

const SELECT_LITTERS: &str = r#"
    SELECT id, breeding_pair_id, born_on, weaning_on, males, females,
           males_separated, females_separated
    FROM litters
"#;

#[derive(Clone)]
pub struct PostgresLitterRepository {
    pool: PgPool,
}

impl PostgresLitterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LitterRepository for PostgresLitterRepository {
    async fn save(&self, litter: &Litter) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO litters (
                id, breeding_pair_id, born_on, weaning_on, males, females,
                males_separated, females_separated
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(litter.id().as_uuid())
        .bind(litter.breeding_pair_id().as_uuid())
        .bind(litter.born_on())
        .bind(litter.weaning_on())
        .bind(litter.males() as i32)
        .bind(litter.females() as i32)
        .bind(litter.is_separated(Sex::Male))
        .bind(litter.is_separated(Sex::Female))
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                let id = litter.breeding_pair_id().to_string();
                Err(DomainError::new(
                    ErrorCode::BreedingPairNotFound,
                    format!("Breeding pair not found: {}", id),
                )
                .with_detail("id", id))
            }
            Err(e) => Err(DomainError::database("Failed to insert litter", e)),
        }
    }

    async fn update(&self, litter: &Litter) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE litters SET
                born_on = $2,
                weaning_on = $3,
                males = $4,
                females = $5
            WHERE id = $1
            "#,
        )
        .bind(litter.id().as_uuid())
        .bind(litter.born_on())
        .bind(litter.weaning_on())
        .bind(litter.males() as i32)
        .bind(litter.females() as i32)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update litter", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::LitterNotFound,
                format!("Litter not found: {}", litter.id()),
            )
            .with_detail("id", litter.id().to_string()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &LitterId) -> Result<Option<Litter>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_LITTERS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch litter", e))?;

        row.as_ref().map(rows::litter).transpose()
    }

    async fn list_by_breeding_pair(
        &self,
        breeding_pair_id: &BreedingPairId,
    ) -> Result<Vec<Litter>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} WHERE breeding_pair_id = $1 ORDER BY born_on",
            SELECT_LITTERS
        ))
        .bind(breeding_pair_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list litters", e))?;

        rows.iter().map(rows::litter).collect()
    }

    async fn list_by_weaning_date_desc(&self) -> Result<Vec<Litter>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY weaning_on DESC", SELECT_LITTERS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list weaning schedule", e))?;

        rows.iter().map(rows::litter).collect()
    }
}
