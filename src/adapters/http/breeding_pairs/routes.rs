//! HTTP routes for breeding pair endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_pair, delete_pair, get_pair, list_pairs, record_litter, update_pair,
    BreedingPairHandlers,
};

pub fn breeding_pair_routes(handlers: BreedingPairHandlers) -> Router {
    Router::new()
        .route("/", get(list_pairs).post(create_pair))
        .route("/:id", get(get_pair).put(update_pair).delete(delete_pair))
        .route("/:id/litters", post(record_litter))
        .with_state(handlers)
}
