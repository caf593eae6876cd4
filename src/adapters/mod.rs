//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - process-local stores for tests and the `memory` backend
//! - `postgres` - sqlx/PostgreSQL persistence
//! - `http` - axum JSON API

pub mod http;
pub mod memory;
pub mod postgres;
