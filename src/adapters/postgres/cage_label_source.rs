//! PostgreSQL implementation of CageLabelSource.
//!
//! Reads labels from the record tables themselves, not from the
//! `cage_labels` registry.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::colony::HousingKind;
use crate::domain::foundation::DomainError;
use crate::ports::CageLabelSource;

#[derive(Clone)]
pub struct PostgresCageLabelSource {
    pool: PgPool,
}

impl PostgresCageLabelSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CageLabelSource for PostgresCageLabelSource {
    async fn cage_labels(&self, kind: HousingKind) -> Result<Vec<String>, DomainError> {
        let sql = match kind {
            HousingKind::BreedingPair => "SELECT cage_label FROM breeding_pairs",
            HousingKind::MaleGroup => "SELECT cage_label FROM weaned_groups WHERE sex = 'male'",
            HousingKind::FemaleGroup => {
                "SELECT cage_label FROM weaned_groups WHERE sex = 'female'"
            }
        };

        sqlx::query_scalar::<_, String>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(kind = kind.as_str(), error = %e, "Cage label query failed");
                DomainError::database("Failed to read cage labels", e)
            })
    }
}
