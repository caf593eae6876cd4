//! Colony-specific error types.

use thiserror::Error;

use super::{CageLabelRejected, InvalidStrainError, Sex};
use crate::domain::foundation::{
    BreedingPairId, DomainError, ErrorCode, LitterId, ValidationError, WeanedGroupId,
};

/// Errors surfaced by colony commands and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColonyError {
    #[error(transparent)]
    InvalidStrain(#[from] InvalidStrainError),

    #[error(transparent)]
    CageLabelRejected(#[from] CageLabelRejected),

    /// Another record took the label between allocation and commit.
    #[error("Cage label already in use: {0}")]
    CageLabelConflict(String),

    #[error("Breeding pair not found: {0}")]
    BreedingPairNotFound(BreedingPairId),

    #[error("Litter not found: {0}")]
    LitterNotFound(LitterId),

    #[error("Weaned group not found: {0}")]
    WeanedGroupNotFound(WeanedGroupId),

    #[error("The {sex} pups of litter {litter_id} have already been separated")]
    AlreadySeparated { litter_id: LitterId, sex: Sex },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ColonyError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ColonyError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ColonyError::InvalidStrain(_) => ErrorCode::InvalidStrain,
            ColonyError::CageLabelRejected(_) => ErrorCode::ValidationFailed,
            ColonyError::CageLabelConflict(_) => ErrorCode::CageLabelConflict,
            ColonyError::BreedingPairNotFound(_) => ErrorCode::BreedingPairNotFound,
            ColonyError::LitterNotFound(_) => ErrorCode::LitterNotFound,
            ColonyError::WeanedGroupNotFound(_) => ErrorCode::WeanedGroupNotFound,
            ColonyError::AlreadySeparated { .. } => ErrorCode::ValidationFailed,
            ColonyError::Validation(_) => ErrorCode::ValidationFailed,
            ColonyError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// True when a retry with a freshly allocated label may succeed.
    pub fn is_label_conflict(&self) -> bool {
        matches!(self, ColonyError::CageLabelConflict(_))
    }
}

impl From<DomainError> for ColonyError {
    fn from(err: DomainError) -> Self {
        let detail = |key: &str| err.details.get(key).cloned();
        match err.code {
            ErrorCode::CageLabelConflict => {
                ColonyError::CageLabelConflict(detail("label").unwrap_or_default())
            }
            ErrorCode::BreedingPairNotFound => match detail("id").and_then(|id| id.parse().ok()) {
                Some(id) => ColonyError::BreedingPairNotFound(id),
                None => ColonyError::Infrastructure(err.to_string()),
            },
            ErrorCode::LitterNotFound => match detail("id").and_then(|id| id.parse().ok()) {
                Some(id) => ColonyError::LitterNotFound(id),
                None => ColonyError::Infrastructure(err.to_string()),
            },
            ErrorCode::WeanedGroupNotFound => match detail("id").and_then(|id| id.parse().ok()) {
                Some(id) => ColonyError::WeanedGroupNotFound(id),
                None => ColonyError::Infrastructure(err.to_string()),
            },
            ErrorCode::LitterAlreadySeparated => {
                let litter_id = detail("id").and_then(|id| id.parse().ok());
                let sex = detail("sex").and_then(|sex| sex.parse().ok());
                match (litter_id, sex) {
                    (Some(litter_id), Some(sex)) => ColonyError::AlreadySeparated { litter_id, sex },
                    _ => ColonyError::Infrastructure(err.to_string()),
                }
            }
            ErrorCode::ValidationFailed => ColonyError::Validation(ValidationError::invalid_format(
                detail("field").unwrap_or_else(|| "unknown".to_string()),
                err.message,
            )),
            _ => ColonyError::Infrastructure(err.to_string()),
        }
    }
}
