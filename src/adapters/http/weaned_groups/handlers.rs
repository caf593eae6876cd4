//! HTTP handlers for weaned group and observation endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{ObservationRequest, ObservationResponse, WeanedGroupResponse};
use crate::adapters::http::error::{colony_error, invalid_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::observation::{
    AddObservationCommand, AddObservationHandler, ListObservationsHandler,
};
use crate::application::handlers::weaned::{ListWeanedGroupsHandler, RetireWeanedGroupHandler};
use crate::domain::foundation::WeanedGroupId;

#[derive(Clone)]
pub struct WeanedGroupHandlers {
    list_handler: Arc<ListWeanedGroupsHandler>,
    retire_handler: Arc<RetireWeanedGroupHandler>,
    add_observation_handler: Arc<AddObservationHandler>,
    list_observations_handler: Arc<ListObservationsHandler>,
}

impl WeanedGroupHandlers {
    pub fn new(
        list_handler: Arc<ListWeanedGroupsHandler>,
        retire_handler: Arc<RetireWeanedGroupHandler>,
        add_observation_handler: Arc<AddObservationHandler>,
        list_observations_handler: Arc<ListObservationsHandler>,
    ) -> Self {
        Self {
            list_handler,
            retire_handler,
            add_observation_handler,
            list_observations_handler,
        }
    }
}

/// GET /api/weaned-groups
pub async fn list_groups(
    State(handlers): State<WeanedGroupHandlers>,
    RequireAuth(_user): RequireAuth,
) -> Response {
    match handlers.list_handler.handle().await {
        Ok(groups) => {
            let body: Vec<WeanedGroupResponse> = groups.iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => colony_error(e),
    }
}

/// DELETE /api/weaned-groups/:id
pub async fn retire_group(
    State(handlers): State<WeanedGroupHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<WeanedGroupId>() else {
        return invalid_id("weaned group");
    };
    match handlers.retire_handler.handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => colony_error(e),
    }
}

/// GET /api/weaned-groups/:id/observations
pub async fn list_observations(
    State(handlers): State<WeanedGroupHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<WeanedGroupId>() else {
        return invalid_id("weaned group");
    };
    match handlers.list_observations_handler.handle(id).await {
        Ok(observations) => {
            let body: Vec<ObservationResponse> = observations.iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => colony_error(e),
    }
}

/// POST /api/weaned-groups/:id/observations
pub async fn add_observation(
    State(handlers): State<WeanedGroupHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<ObservationRequest>,
) -> Response {
    let Ok(weaned_group_id) = id.parse::<WeanedGroupId>() else {
        return invalid_id("weaned group");
    };
    let cmd = AddObservationCommand {
        weaned_group_id,
        note: req.note,
    };
    match handlers.add_observation_handler.handle(cmd).await {
        Ok(observation) => {
            tracing::debug!(user_id = %user.id, group_id = %weaned_group_id, "Observation added");
            (StatusCode::CREATED, Json(ObservationResponse::from(&observation))).into_response()
        }
        Err(e) => colony_error(e),
    }
}
