//! WeaningScheduleHandler - Query handler for litters due to be weaned.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::colony::{ColonyError, Labeled, Litter, Strain};
use crate::ports::{BreedingPairRepository, LitterRepository};

/// A litter on the weaning schedule with its parents' cage and strain.
#[derive(Debug, Clone)]
pub struct WeaningScheduleEntry {
    pub litter: Litter,
    pub parents_label: String,
    pub strain: Strain,
}

pub struct WeaningScheduleHandler {
    pairs: Arc<dyn BreedingPairRepository>,
    litters: Arc<dyn LitterRepository>,
}

impl WeaningScheduleHandler {
    pub fn new(pairs: Arc<dyn BreedingPairRepository>, litters: Arc<dyn LitterRepository>) -> Self {
        Self { pairs, litters }
    }

    /// Latest weaning date first.
    pub async fn handle(&self) -> Result<Vec<WeaningScheduleEntry>, ColonyError> {
        let pairs: HashMap<_, _> = self
            .pairs
            .list_recent_first()
            .await?
            .into_iter()
            .map(|p| (*p.id(), (p.cage_label().to_string(), p.strain())))
            .collect();

        let entries = self
            .litters
            .list_by_weaning_date_desc()
            .await?
            .into_iter()
            .filter_map(|litter| {
                let (parents_label, strain) = pairs.get(litter.breeding_pair_id())?.clone();
                Some(WeaningScheduleEntry {
                    litter,
                    parents_label,
                    strain,
                })
            })
            .collect();
        Ok(entries)
    }
}
