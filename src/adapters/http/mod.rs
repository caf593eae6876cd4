//! HTTP adapters - REST API implementations.
//!
//! Each colony module has its own HTTP adapter (dto / handlers / routes);
//! [`router`] assembles them behind the shared middleware stack.

pub mod auth;
pub mod breeding_pairs;
pub mod cages;
pub mod error;
pub mod litters;
pub mod middleware;
pub mod router;
pub mod weaned_groups;

pub use router::{api_router, ApiHandlers};
