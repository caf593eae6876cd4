//! HTTP routes for weaned group and observation endpoints.

use axum::{
    routing::{delete, get},
    Router,
};

use super::handlers::{
    add_observation, list_groups, list_observations, retire_group, WeanedGroupHandlers,
};

pub fn weaned_group_routes(handlers: WeanedGroupHandlers) -> Router {
    Router::new()
        .route("/", get(list_groups))
        .route("/:id", delete(retire_group))
        .route(
            "/:id/observations",
            get(list_observations).post(add_observation),
        )
        .with_state(handlers)
}
