//! HTTP routes for authentication endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, logout, register_user, AuthHandlers};

pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/users", post(register_user))
        .with_state(handlers)
}
