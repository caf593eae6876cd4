//! HTTP handlers for strain and cage label endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{LabelStatusResponse, NextLabelQuery, NextLabelResponse, StrainResponse};
use crate::adapters::http::error::colony_error;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::cage::CageLabelService;
use crate::domain::colony::{CageLabel, Strain};

#[derive(Clone)]
pub struct CageHandlers {
    cages: Arc<CageLabelService>,
}

impl CageHandlers {
    pub fn new(cages: Arc<CageLabelService>) -> Self {
        Self { cages }
    }
}

/// GET /api/strains
pub async fn list_strains(RequireAuth(_user): RequireAuth) -> Response {
    let strains: Vec<StrainResponse> = Strain::ALL.into_iter().map(Into::into).collect();
    (StatusCode::OK, Json(strains)).into_response()
}

/// GET /api/cages/next?strain=<name>
pub async fn next_label(
    State(handlers): State<CageHandlers>,
    RequireAuth(_user): RequireAuth,
    Query(query): Query<NextLabelQuery>,
) -> Response {
    match handlers.cages.next_available_label(&query.strain).await {
        Ok(label) => {
            let strain = label.strain().map(|s| s.name()).unwrap_or_default();
            (
                StatusCode::OK,
                Json(NextLabelResponse {
                    strain,
                    label: label.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => colony_error(e),
    }
}

/// GET /api/cages/:label
pub async fn label_status(
    State(handlers): State<CageHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(label): Path<String>,
) -> Response {
    let label = CageLabel::normalize_input(&label);
    match handlers.cages.is_label_in_use(&label).await {
        Ok(in_use) => (StatusCode::OK, Json(LabelStatusResponse { label, in_use })).into_response(),
        Err(e) => colony_error(e.into()),
    }
}
