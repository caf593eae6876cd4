//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::user::UserAccount;
use crate::ports::UserRepository;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, account: &UserAccount) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.id().as_uuid())
        .bind(account.email())
        .bind(account.password_hash())
        .bind(account.created_at().as_datetime())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DomainError::new(
                    ErrorCode::DuplicateEmail,
                    format!("Email already registered: {}", account.email()),
                )
                .with_detail("email", account.email()))
            }
            Err(e) => Err(DomainError::database("Failed to insert user", e)),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, DomainError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch user", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let read = |e: sqlx::Error| DomainError::database("Failed to read user row", e);
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read)?;
        Ok(Some(UserAccount::reconstitute(
            UserId::from_uuid(row.try_get("id").map_err(read)?),
            row.try_get("email").map_err(read)?,
            row.try_get("password_hash").map_err(read)?,
            Timestamp::from_datetime(created_at),
        )))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to count users", e))?;
        Ok(count.max(0) as u64)
    }
}
