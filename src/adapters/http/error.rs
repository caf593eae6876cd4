//! Error bodies and status mapping shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::colony::ColonyError;
use crate::domain::foundation::{AuthError, ErrorCode};
use crate::domain::user::AccountError;

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Response for a malformed path id.
pub fn invalid_id(what: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!("Invalid {} ID", what))),
    )
        .into_response()
}

pub fn colony_error(error: ColonyError) -> Response {
    let code = error.code();
    let status = match &error {
        ColonyError::BreedingPairNotFound(_)
        | ColonyError::LitterNotFound(_)
        | ColonyError::WeanedGroupNotFound(_) => StatusCode::NOT_FOUND,
        ColonyError::InvalidStrain(_)
        | ColonyError::CageLabelRejected(_)
        | ColonyError::AlreadySeparated { .. }
        | ColonyError::Validation(_) => StatusCode::BAD_REQUEST,
        ColonyError::CageLabelConflict(_) => StatusCode::CONFLICT,
        ColonyError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Colony operation failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(code, "Internal error")),
            )
                .into_response();
        }
    };

    let mut body = ErrorResponse::new(code, error.to_string());
    match &error {
        ColonyError::CageLabelRejected(rejected) => {
            body = body.with_details(serde_json::json!({
                "label": rejected.label,
                "strain": rejected.strain.name(),
                "reasons": rejected.reasons,
            }));
        }
        ColonyError::CageLabelConflict(label) => {
            body = body.with_details(serde_json::json!({ "label": label }));
        }
        _ => {}
    }
    (status, Json(body)).into_response()
}

pub fn auth_error(error: AuthError) -> Response {
    match error {
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Auth service unavailable: {}", msg);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(
                    "SERVICE_UNAVAILABLE",
                    "Authentication service unavailable",
                )),
            )
                .into_response()
        }
        other => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::unauthorized(other.to_string())),
        )
            .into_response(),
    }
}

pub fn account_error(error: AccountError) -> Response {
    let status = match &error {
        AccountError::Validation(_) => StatusCode::BAD_REQUEST,
        AccountError::DuplicateEmail(_) => StatusCode::CONFLICT,
        AccountError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Account operation failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal error")),
            )
                .into_response();
        }
    };
    (status, Json(ErrorResponse::new(error.code(), error.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::colony::{CageLedger, InvalidStrainError, Strain};
    use crate::domain::foundation::LitterId;

    #[test]
    fn not_found_maps_to_404() {
        let response = colony_error(ColonyError::LitterNotFound(LitterId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn gate_rejection_and_unknown_strain_map_to_400() {
        let rejected = CageLedger::from_labels(["A1"])
            .check_new_label("A1", Strain::C57B6J)
            .unwrap_err();
        assert_eq!(
            colony_error(rejected.into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            colony_error(InvalidStrainError::new("XYZ").into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn commit_conflict_maps_to_409() {
        let response = colony_error(ColonyError::CageLabelConflict("A1".to_string()));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = colony_error(ColonyError::infrastructure("pool timed out"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn credentials_map_to_401() {
        assert_eq!(
            auth_error(AuthError::InvalidCredentials).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            account_error(AccountError::DuplicateEmail("a@b.c".into())).status(),
            StatusCode::CONFLICT
        );
    }
}
