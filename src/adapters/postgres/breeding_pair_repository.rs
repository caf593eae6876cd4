//! PostgreSQL implementation of BreedingPairRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::{cage_labels, rows};
use crate::domain::colony::{BreedingPair, HousingKind, Labeled};
use crate::domain::foundation::{BreedingPairId, DomainError, ErrorCode};
use crate::ports::BreedingPairRepository;

const SELECT_PAIRS: &str = r#"
    SELECT id, cage_label, strain, paired_on, males, females, created_at
    FROM breeding_pairs
"#;

#[derive(Clone)]
pub struct PostgresBreedingPairRepository {
    pool: PgPool,
}

impl PostgresBreedingPairRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn not_found(id: &BreedingPairId) -> DomainError {
    DomainError::new(
        ErrorCode::BreedingPairNotFound,
        format!("Breeding pair not found: {}", id),
    )
    .with_detail("id", id.to_string())
}

#[async_trait]
impl BreedingPairRepository for PostgresBreedingPairRepository {
    async fn save(&self, pair: &BreedingPair) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        cage_labels::claim(
            &mut tx,
            pair.cage_label(),
            HousingKind::BreedingPair,
            pair.id().as_uuid(),
        )
        .await?;

        sqlx::query(
            r#"
            INSERT INTO breeding_pairs (
                id, cage_label, strain, paired_on, males, females, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(pair.id().as_uuid())
        .bind(pair.cage_label())
        .bind(pair.strain().name())
        .bind(pair.paired_on())
        .bind(pair.males() as i32)
        .bind(pair.females() as i32)
        .bind(pair.created_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert breeding pair", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit breeding pair", e))
    }

    async fn update(&self, pair: &BreedingPair) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let result = sqlx::query(
            r#"
            UPDATE breeding_pairs SET
                cage_label = $2,
                strain = $3,
                paired_on = $4,
                males = $5,
                females = $6
            WHERE id = $1
            "#,
        )
        .bind(pair.id().as_uuid())
        .bind(pair.cage_label())
        .bind(pair.strain().name())
        .bind(pair.paired_on())
        .bind(pair.males() as i32)
        .bind(pair.females() as i32)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to update breeding pair", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(pair.id()));
        }

        cage_labels::move_to(&mut tx, pair.cage_label(), pair.id().as_uuid()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit breeding pair", e))
    }

    async fn find_by_id(&self, id: &BreedingPairId) -> Result<Option<BreedingPair>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_PAIRS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch breeding pair", e))?;

        row.as_ref().map(rows::breeding_pair).transpose()
    }

    async fn list_recent_first(&self) -> Result<Vec<BreedingPair>, DomainError> {
        let rows = sqlx::query(&format!(
            "{} ORDER BY paired_on DESC, created_at DESC",
            SELECT_PAIRS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list breeding pairs", e))?;

        rows.iter().map(rows::breeding_pair).collect()
    }

    async fn delete(&self, id: &BreedingPairId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        // Litters cascade; weaned groups keep their rows with the link nulled.
        let result = sqlx::query("DELETE FROM breeding_pairs WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete breeding pair", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        cage_labels::release(&mut tx, id.as_uuid()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit breeding pair deletion", e))
    }
}
