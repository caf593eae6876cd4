//! GetBreedingPairHandler - Query handler for one pair and its litters.

use std::sync::Arc;

use crate::domain::colony::{BreedingPair, ColonyError, Litter};
use crate::domain::foundation::BreedingPairId;
use crate::ports::{BreedingPairRepository, LitterRepository};

/// A breeding pair together with every litter it has produced.
#[derive(Debug, Clone)]
pub struct BreedingPairView {
    pub pair: BreedingPair,
    pub litters: Vec<Litter>,
}

pub struct GetBreedingPairHandler {
    pairs: Arc<dyn BreedingPairRepository>,
    litters: Arc<dyn LitterRepository>,
}

impl GetBreedingPairHandler {
    pub fn new(pairs: Arc<dyn BreedingPairRepository>, litters: Arc<dyn LitterRepository>) -> Self {
        Self { pairs, litters }
    }

    pub async fn handle(&self, id: BreedingPairId) -> Result<BreedingPairView, ColonyError> {
        let pair = self
            .pairs
            .find_by_id(&id)
            .await?
            .ok_or(ColonyError::BreedingPairNotFound(id))?;
        let litters = self.litters.list_by_breeding_pair(&id).await?;
        Ok(BreedingPairView { pair, litters })
    }
}
