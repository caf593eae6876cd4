//! HTTP adapter for litters, their weaning schedule and separation.

mod dto;
mod handlers;
mod routes;

pub(crate) use dto::{LitterRequest, LitterResponse};
pub use handlers::LitterHandlers;
pub use routes::litter_routes;
