//! HTTP adapter for breeding pairs and the litters they produce.

mod dto;
mod handlers;
mod routes;

pub use handlers::BreedingPairHandlers;
pub use routes::breeding_pair_routes;
