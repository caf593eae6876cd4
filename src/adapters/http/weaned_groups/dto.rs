//! HTTP DTOs for weaned group and observation endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::colony::{Labeled, Observation, Sex, WeanedGroup};

#[derive(Debug, Clone, Serialize)]
pub struct WeanedGroupResponse {
    pub id: String,
    pub sex: Sex,
    pub cage_label: String,
    pub strain: &'static str,
    pub born_on: NaiveDate,
    pub weaned_on: NaiveDate,
    pub count: u32,
    pub parents_label: String,
    pub breeding_pair_id: Option<String>,
    pub litter_id: Option<String>,
}

impl From<&WeanedGroup> for WeanedGroupResponse {
    fn from(group: &WeanedGroup) -> Self {
        Self {
            id: group.id().to_string(),
            sex: group.sex(),
            cage_label: group.cage_label().to_string(),
            strain: group.strain().name(),
            born_on: group.born_on(),
            weaned_on: group.weaned_on(),
            count: group.count(),
            parents_label: group.parents_label().to_string(),
            breeding_pair_id: group.breeding_pair_id().map(|id| id.to_string()),
            litter_id: group.litter_id().map(|id| id.to_string()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservationRequest {
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObservationResponse {
    pub id: String,
    pub weaned_group_id: String,
    pub note: String,
    pub recorded_at: String,
}

impl From<&Observation> for ObservationResponse {
    fn from(observation: &Observation) -> Self {
        Self {
            id: observation.id().to_string(),
            weaned_group_id: observation.weaned_group_id().to_string(),
            note: observation.note().to_string(),
            recorded_at: observation.recorded_at().as_datetime().to_rfc3339(),
        }
    }
}
