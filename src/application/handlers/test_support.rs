//! Shared fixtures for handler tests.

use std::sync::Arc;

use chrono::NaiveDate;

use super::cage::CageLabelService;
use crate::adapters::memory::InMemoryColonyStore;
use crate::domain::colony::{BreedingPairDetails, LitterDetails, Strain};

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub(crate) fn colony() -> (InMemoryColonyStore, Arc<CageLabelService>) {
    let store = InMemoryColonyStore::new();
    let cages = Arc::new(CageLabelService::new(Arc::new(store.clone())));
    (store, cages)
}

pub(crate) fn pair_details(strain: Strain) -> BreedingPairDetails {
    BreedingPairDetails {
        strain,
        paired_on: date(2024, 3, 1),
        males: 1,
        females: 2,
    }
}

pub(crate) fn litter_details(males: u32, females: u32) -> LitterDetails {
    LitterDetails {
        born_on: date(2024, 4, 1),
        weaning_on: None,
        males,
        females,
    }
}
