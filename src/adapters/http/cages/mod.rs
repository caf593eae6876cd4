//! HTTP adapter for the strain registry and cage label lookups.

mod dto;
mod handlers;
mod routes;

pub use handlers::CageHandlers;
pub use routes::{cage_routes, strain_routes};
