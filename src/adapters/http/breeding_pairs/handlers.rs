//! HTTP handlers for breeding pair endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{BreedingPairDetailResponse, BreedingPairRequest, BreedingPairResponse};
use crate::adapters::http::error::{colony_error, invalid_id};
use crate::adapters::http::litters::{LitterRequest, LitterResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::breeding::{
    CreateBreedingPairCommand, CreateBreedingPairHandler, DeleteBreedingPairHandler,
    GetBreedingPairHandler, ListBreedingPairsHandler, UpdateBreedingPairCommand,
    UpdateBreedingPairHandler,
};
use crate::application::handlers::litter::{RecordLitterCommand, RecordLitterHandler};
use crate::domain::colony::{CageLabel, ColonyError};
use crate::domain::foundation::BreedingPairId;

#[derive(Clone)]
pub struct BreedingPairHandlers {
    create_handler: Arc<CreateBreedingPairHandler>,
    update_handler: Arc<UpdateBreedingPairHandler>,
    delete_handler: Arc<DeleteBreedingPairHandler>,
    get_handler: Arc<GetBreedingPairHandler>,
    list_handler: Arc<ListBreedingPairsHandler>,
    record_litter_handler: Arc<RecordLitterHandler>,
}

impl BreedingPairHandlers {
    pub fn new(
        create_handler: Arc<CreateBreedingPairHandler>,
        update_handler: Arc<UpdateBreedingPairHandler>,
        delete_handler: Arc<DeleteBreedingPairHandler>,
        get_handler: Arc<GetBreedingPairHandler>,
        list_handler: Arc<ListBreedingPairsHandler>,
        record_litter_handler: Arc<RecordLitterHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            get_handler,
            list_handler,
            record_litter_handler,
        }
    }
}

/// GET /api/breeding-pairs
pub async fn list_pairs(
    State(handlers): State<BreedingPairHandlers>,
    RequireAuth(_user): RequireAuth,
) -> Response {
    match handlers.list_handler.handle().await {
        Ok(pairs) => {
            let body: Vec<BreedingPairResponse> = pairs.iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => colony_error(e),
    }
}

/// POST /api/breeding-pairs
pub async fn create_pair(
    State(handlers): State<BreedingPairHandlers>,
    RequireAuth(_user): RequireAuth,
    Json(req): Json<BreedingPairRequest>,
) -> Response {
    let details = match req.details() {
        Ok(details) => details,
        Err(e) => return colony_error(ColonyError::from(e)),
    };
    let cmd = CreateBreedingPairCommand {
        cage_label: req.cage_label.as_deref().map(CageLabel::normalize_input),
        details,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(pair) => (StatusCode::CREATED, Json(BreedingPairResponse::from(&pair))).into_response(),
        Err(e) => colony_error(e),
    }
}

/// GET /api/breeding-pairs/:id
pub async fn get_pair(
    State(handlers): State<BreedingPairHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<BreedingPairId>() else {
        return invalid_id("breeding pair");
    };

    match handlers.get_handler.handle(id).await {
        Ok(view) => (StatusCode::OK, Json(BreedingPairDetailResponse::from(&view))).into_response(),
        Err(e) => colony_error(e),
    }
}

/// PUT /api/breeding-pairs/:id
pub async fn update_pair(
    State(handlers): State<BreedingPairHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<BreedingPairRequest>,
) -> Response {
    let Ok(id) = id.parse::<BreedingPairId>() else {
        return invalid_id("breeding pair");
    };
    let details = match req.details() {
        Ok(details) => details,
        Err(e) => return colony_error(ColonyError::from(e)),
    };
    let cmd = UpdateBreedingPairCommand {
        id,
        cage_label: req.cage_label.as_deref().map(CageLabel::normalize_input),
        details,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(pair) => (StatusCode::OK, Json(BreedingPairResponse::from(&pair))).into_response(),
        Err(e) => colony_error(e),
    }
}

/// DELETE /api/breeding-pairs/:id
pub async fn delete_pair(
    State(handlers): State<BreedingPairHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let Ok(id) = id.parse::<BreedingPairId>() else {
        return invalid_id("breeding pair");
    };

    match handlers.delete_handler.handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => colony_error(e),
    }
}

/// POST /api/breeding-pairs/:id/litters
pub async fn record_litter(
    State(handlers): State<BreedingPairHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<String>,
    Json(req): Json<LitterRequest>,
) -> Response {
    let Ok(breeding_pair_id) = id.parse::<BreedingPairId>() else {
        return invalid_id("breeding pair");
    };
    let cmd = RecordLitterCommand {
        breeding_pair_id,
        details: req.into(),
    };

    match handlers.record_litter_handler.handle(cmd).await {
        Ok(litter) => (StatusCode::CREATED, Json(LitterResponse::from(&litter))).into_response(),
        Err(e) => colony_error(e),
    }
}
