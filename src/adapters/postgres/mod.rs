//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresBreedingPairRepository`, `PostgresLitterRepository`,
//!   `PostgresWeanedGroupRepository`, `PostgresObservationRepository`
//! - `PostgresCageLabelSource` - label queries for the allocator
//! - `PostgresUserRepository` - staff accounts
//!
//! Records that occupy a cage register their label in `cage_labels` in the
//! same transaction as the record row.

mod breeding_pair_repository;
mod cage_label_source;
mod cage_labels;
mod litter_repository;
mod observation_repository;
mod rows;
mod user_repository;
mod weaned_group_repository;

pub use breeding_pair_repository::PostgresBreedingPairRepository;
pub use cage_label_source::PostgresCageLabelSource;
pub use litter_repository::PostgresLitterRepository;
pub use observation_repository::PostgresObservationRepository;
pub use user_repository::PostgresUserRepository;
pub use weaned_group_repository::PostgresWeanedGroupRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Opens a connection pool sized by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );
    Ok(pool)
}

/// Applies the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
