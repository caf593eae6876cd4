//! HTTP adapter for login, logout and account registration.

mod dto;
mod handlers;
mod routes;

pub use handlers::AuthHandlers;
pub use routes::auth_routes;
