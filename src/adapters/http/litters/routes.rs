//! HTTP routes for litter endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    separate_females, separate_males, update_litter, weaning_schedule, LitterHandlers,
};

pub fn litter_routes(handlers: LitterHandlers) -> Router {
    Router::new()
        .route("/weaning", get(weaning_schedule))
        .route("/:id", put(update_litter))
        .route("/:id/males", post(separate_males))
        .route("/:id/females", post(separate_females))
        .with_state(handlers)
}
