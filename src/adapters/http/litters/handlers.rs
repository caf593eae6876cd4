//! HTTP handlers for litter endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{LitterRequest, LitterResponse, SeparateRequest, WeaningScheduleResponse};
use crate::adapters::http::error::{colony_error, invalid_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::weaned_groups::WeanedGroupResponse;
use crate::application::handlers::litter::{
    UpdateLitterCommand, UpdateLitterHandler, WeaningScheduleHandler,
};
use crate::application::handlers::weaned::{
    SeparateWeanedGroupCommand, SeparateWeanedGroupHandler,
};
use crate::domain::colony::{CageLabel, Sex};
use crate::domain::foundation::LitterId;

#[derive(Clone)]
pub struct LitterHandlers {
    update_handler: Arc<UpdateLitterHandler>,
    schedule_handler: Arc<WeaningScheduleHandler>,
    separate_handler: Arc<SeparateWeanedGroupHandler>,
}

impl LitterHandlers {
    pub fn new(
        update_handler: Arc<UpdateLitterHandler>,
        schedule_handler: Arc<WeaningScheduleHandler>,
        separate_handler: Arc<SeparateWeanedGroupHandler>,
    ) -> Self {
        Self {
            update_handler,
            schedule_handler,
            separate_handler,
        }
    }
}

/// GET /api/litters/weaning
pub async fn weaning_schedule(
    State(handlers): State<LitterHandlers>,
    RequireAuth(_user): RequireAuth,
) -> Response {
    match handlers.schedule_handler.handle().await {
        Ok(entries) => {
            let body: Vec<WeaningScheduleResponse> = entries.iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => colony_error(e),
    }
}

/// PUT /api/litters/:id
pub async fn update_litter(
    State(handlers): State<LitterHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<LitterRequest>,
) -> Response {
    let Ok(id) = id.parse::<LitterId>() else {
        return invalid_id("litter");
    };

    let cmd = UpdateLitterCommand {
        id,
        details: req.into(),
    };
    match handlers.update_handler.handle(cmd).await {
        Ok(litter) => (StatusCode::OK, Json(LitterResponse::from(&litter))).into_response(),
        Err(e) => colony_error(e),
    }
}

/// POST /api/litters/:id/males
pub async fn separate_males(
    State(handlers): State<LitterHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    body: Option<Json<SeparateRequest>>,
) -> Response {
    separate(handlers, id, Sex::Male, body).await
}

/// POST /api/litters/:id/females
pub async fn separate_females(
    State(handlers): State<LitterHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    body: Option<Json<SeparateRequest>>,
) -> Response {
    separate(handlers, id, Sex::Female, body).await
}

async fn separate(
    handlers: LitterHandlers,
    id: String,
    sex: Sex,
    body: Option<Json<SeparateRequest>>,
) -> Response {
    let Ok(litter_id) = id.parse::<LitterId>() else {
        return invalid_id("litter");
    };
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let cmd = SeparateWeanedGroupCommand {
        litter_id,
        sex,
        cage_label: req.cage_label.as_deref().map(CageLabel::normalize_input),
        weaned_on: req.weaned_on,
    };
    match handlers.separate_handler.handle(cmd).await {
        Ok(group) => (StatusCode::CREATED, Json(WeanedGroupResponse::from(&group))).into_response(),
        Err(e) => colony_error(e),
    }
}
