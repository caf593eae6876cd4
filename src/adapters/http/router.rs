//! Top-level router: nests every module's routes under `/api` and applies the
//! shared middleware stack.

use std::time::Duration;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::auth::{auth_routes, AuthHandlers};
use super::breeding_pairs::{breeding_pair_routes, BreedingPairHandlers};
use super::cages::{cage_routes, strain_routes, CageHandlers};
use super::litters::{litter_routes, LitterHandlers};
use super::middleware::{auth_middleware, AuthState};
use super::weaned_groups::{weaned_group_routes, WeanedGroupHandlers};
use crate::config::ServerConfig;

/// Handler bundles for every route module.
#[derive(Clone)]
pub struct ApiHandlers {
    pub auth: AuthHandlers,
    pub cages: CageHandlers,
    pub breeding_pairs: BreedingPairHandlers,
    pub litters: LitterHandlers,
    pub weaned_groups: WeanedGroupHandlers,
}

/// Builds the complete application router.
pub fn api_router(handlers: ApiHandlers, auth_state: AuthState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .nest("/auth", auth_routes(handlers.auth))
        .nest("/strains", strain_routes())
        .nest("/cages", cage_routes(handlers.cages))
        .nest("/breeding-pairs", breeding_pair_routes(handlers.breeding_pairs))
        .nest("/litters", litter_routes(handlers.litters))
        .nest("/weaned-groups", weaned_group_routes(handlers.weaned_groups));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Configured origins are allowed explicitly. With none configured, any
/// origin is accepted outside production and none in production.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        layer.allow_origin(origins)
    } else if server.is_production() {
        layer
    } else {
        layer.allow_origin(Any)
    }
}
