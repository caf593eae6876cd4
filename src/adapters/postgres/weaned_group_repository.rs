//! PostgreSQL implementation of WeanedGroupRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::{cage_labels, rows};
use crate::domain::colony::{Labeled, Sex, WeanedGroup};
use crate::domain::foundation::{DomainError, ErrorCode, LitterId, WeanedGroupId};
use crate::ports::WeanedGroupRepository;

const SELECT_GROUPS: &str = r#"
    SELECT id, sex, cage_label, strain, born_on, weaned_on, head_count,
           parents_label, breeding_pair_id, litter_id
    FROM weaned_groups
"#;

/// Flip the litter's flag for `sex`. The guarded update makes two
/// concurrent separations of the same sex serialize on the row; the loser
/// sees zero rows affected.
async fn mark_separated(
    tx: &mut Transaction<'_, Postgres>,
    litter_id: &LitterId,
    sex: Sex,
) -> Result<(), DomainError> {
    let sql = match sex {
        Sex::Male => {
            "UPDATE litters SET males_separated = TRUE WHERE id = $1 AND males_separated = FALSE"
        }
        Sex::Female => {
            "UPDATE litters SET females_separated = TRUE WHERE id = $1 AND females_separated = FALSE"
        }
    };
    let result = sqlx::query(sql)
        .bind(litter_id.as_uuid())
        .execute(&mut **tx)
        .await
        .map_err(|e| DomainError::database("Failed to mark litter separated", e))?;
    if result.rows_affected() == 1 {
        return Ok(());
    }

    let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM litters WHERE id = $1")
        .bind(litter_id.as_uuid())
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| DomainError::database("Failed to fetch litter", e))?;
    match exists {
        Some(_) => Err(DomainError::litter_already_separated(litter_id, sex)),
        None => Err(DomainError::new(
            ErrorCode::LitterNotFound,
            format!("Litter not found: {}", litter_id),
        )
        .with_detail("id", litter_id.to_string())),
    }
}

#[derive(Clone)]
pub struct PostgresWeanedGroupRepository {
    pool: PgPool,
}

impl PostgresWeanedGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeanedGroupRepository for PostgresWeanedGroupRepository {
    async fn save(&self, group: &WeanedGroup) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        if let Some(litter_id) = group.litter_id() {
            mark_separated(&mut tx, litter_id, group.sex()).await?;
        }

        cage_labels::claim(
            &mut tx,
            group.cage_label(),
            group.sex().housing_kind(),
            group.id().as_uuid(),
        )
        .await?;

        sqlx::query(
            r#"
            INSERT INTO weaned_groups (
                id, sex, cage_label, strain, born_on, weaned_on, head_count,
                parents_label, breeding_pair_id, litter_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(group.id().as_uuid())
        .bind(group.sex().as_str())
        .bind(group.cage_label())
        .bind(group.strain().name())
        .bind(group.born_on())
        .bind(group.weaned_on())
        .bind(group.count() as i32)
        .bind(group.parents_label())
        .bind(group.breeding_pair_id().map(|id| *id.as_uuid()))
        .bind(group.litter_id().map(|id| *id.as_uuid()))
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert weaned group", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit weaned group", e))
    }

    async fn find_by_id(&self, id: &WeanedGroupId) -> Result<Option<WeanedGroup>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_GROUPS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch weaned group", e))?;

        row.as_ref().map(rows::weaned_group).transpose()
    }

    async fn list_by_strain(&self) -> Result<Vec<WeanedGroup>, DomainError> {
        let rows = sqlx::query(&format!("{} ORDER BY strain, cage_label", SELECT_GROUPS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list weaned groups", e))?;

        rows.iter().map(rows::weaned_group).collect()
    }

    async fn delete(&self, id: &WeanedGroupId) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let result = sqlx::query("DELETE FROM weaned_groups WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete weaned group", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::WeanedGroupNotFound,
                format!("Weaned group not found: {}", id),
            )
            .with_detail("id", id.to_string()));
        }

        cage_labels::release(&mut tx, id.as_uuid()).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit weaned group deletion", e))
    }
}
