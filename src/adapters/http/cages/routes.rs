//! HTTP routes for strain and cage label endpoints.

use axum::{routing::get, Router};

use super::handlers::{label_status, list_strains, next_label, CageHandlers};

pub fn strain_routes() -> Router {
    Router::new().route("/", get(list_strains))
}

pub fn cage_routes(handlers: CageHandlers) -> Router {
    Router::new()
        .route("/next", get(next_label))
        .route("/:label", get(label_status))
        .with_state(handlers)
}
