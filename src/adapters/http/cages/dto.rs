//! HTTP DTOs for strain and cage label endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::colony::Strain;

#[derive(Debug, Clone, Deserialize)]
pub struct NextLabelQuery {
    pub strain: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrainResponse {
    pub name: &'static str,
    pub prefix: char,
}

impl From<Strain> for StrainResponse {
    fn from(strain: Strain) -> Self {
        Self {
            name: strain.name(),
            prefix: strain.prefix(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NextLabelResponse {
    pub strain: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelStatusResponse {
    pub label: String,
    pub in_use: bool,
}
