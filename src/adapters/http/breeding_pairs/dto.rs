//! HTTP DTOs for breeding pair endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adapters::http::litters::LitterResponse;
use crate::application::handlers::breeding::BreedingPairView;
use crate::domain::colony::{BreedingPair, BreedingPairDetails, InvalidStrainError, Labeled, Strain};

/// Body for creating or editing a breeding pair.
#[derive(Debug, Clone, Deserialize)]
pub struct BreedingPairRequest {
    /// Omit on create to take the next free label for the strain; omit on
    /// update to keep the current cage.
    #[serde(default)]
    pub cage_label: Option<String>,
    pub strain: String,
    pub paired_on: NaiveDate,
    #[serde(default)]
    pub males: u32,
    #[serde(default)]
    pub females: u32,
}

impl BreedingPairRequest {
    pub fn details(&self) -> Result<BreedingPairDetails, InvalidStrainError> {
        Ok(BreedingPairDetails {
            strain: Strain::resolve(&self.strain)?,
            paired_on: self.paired_on,
            males: self.males,
            females: self.females,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BreedingPairResponse {
    pub id: String,
    pub cage_label: String,
    pub strain: &'static str,
    pub paired_on: NaiveDate,
    pub males: u32,
    pub females: u32,
    pub created_at: String,
}

impl From<&BreedingPair> for BreedingPairResponse {
    fn from(pair: &BreedingPair) -> Self {
        Self {
            id: pair.id().to_string(),
            cage_label: pair.cage_label().to_string(),
            strain: pair.strain().name(),
            paired_on: pair.paired_on(),
            males: pair.males(),
            females: pair.females(),
            created_at: pair.created_at().as_datetime().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BreedingPairDetailResponse {
    #[serde(flatten)]
    pub pair: BreedingPairResponse,
    pub litters: Vec<LitterResponse>,
}

impl From<&BreedingPairView> for BreedingPairDetailResponse {
    fn from(view: &BreedingPairView) -> Self {
        Self {
            pair: BreedingPairResponse::from(&view.pair),
            litters: view.litters.iter().map(Into::into).collect(),
        }
    }
}
