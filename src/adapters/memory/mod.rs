//! In-memory adapters.
//!
//! Back every port with process-local state. Used by the test suites and by
//! the `memory` storage backend for local runs.

mod colony_store;
mod session_store;
mod user_repository;

pub use colony_store::InMemoryColonyStore;
pub use session_store::InMemorySessionStore;
pub use user_repository::InMemoryUserRepository;
