//! HTTP DTOs for litter endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::handlers::litter::WeaningScheduleEntry;
use crate::domain::colony::{Litter, LitterDetails, Sex};

/// Body for recording or correcting a litter.
#[derive(Debug, Clone, Deserialize)]
pub struct LitterRequest {
    pub born_on: NaiveDate,
    /// Omitted means four weeks after birth.
    #[serde(default)]
    pub weaning_on: Option<NaiveDate>,
    #[serde(default)]
    pub males: u32,
    #[serde(default)]
    pub females: u32,
}

impl From<LitterRequest> for LitterDetails {
    fn from(req: LitterRequest) -> Self {
        LitterDetails {
            born_on: req.born_on,
            weaning_on: req.weaning_on,
            males: req.males,
            females: req.females,
        }
    }
}

/// Body for separating one sex of a litter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeparateRequest {
    #[serde(default)]
    pub cage_label: Option<String>,
    #[serde(default)]
    pub weaned_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LitterResponse {
    pub id: String,
    pub breeding_pair_id: String,
    pub born_on: NaiveDate,
    pub weaning_on: NaiveDate,
    pub males: u32,
    pub females: u32,
    pub males_separated: bool,
    pub females_separated: bool,
}

impl From<&Litter> for LitterResponse {
    fn from(litter: &Litter) -> Self {
        Self {
            id: litter.id().to_string(),
            breeding_pair_id: litter.breeding_pair_id().to_string(),
            born_on: litter.born_on(),
            weaning_on: litter.weaning_on(),
            males: litter.males(),
            females: litter.females(),
            males_separated: litter.is_separated(Sex::Male),
            females_separated: litter.is_separated(Sex::Female),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaningScheduleResponse {
    #[serde(flatten)]
    pub litter: LitterResponse,
    pub parents_label: String,
    pub strain: &'static str,
}

impl From<&WeaningScheduleEntry> for WeaningScheduleResponse {
    fn from(entry: &WeaningScheduleEntry) -> Self {
        Self {
            litter: LitterResponse::from(&entry.litter),
            parents_label: entry.parents_label.clone(),
            strain: entry.strain.name(),
        }
    }
}
