//! RecordLitterHandler - Command handler for registering a newborn litter.

use std::sync::Arc;

use crate::domain::colony::{ColonyError, Litter, LitterDetails};
use crate::domain::foundation::{BreedingPairId, LitterId};
use crate::ports::{BreedingPairRepository, LitterRepository};

/// Command to record a litter born to a breeding pair.
#[derive(Debug, Clone)]
pub struct RecordLitterCommand {
    pub breeding_pair_id: BreedingPairId,
    pub details: LitterDetails,
}

pub struct RecordLitterHandler {
    pairs: Arc<dyn BreedingPairRepository>,
    litters: Arc<dyn LitterRepository>,
}

impl RecordLitterHandler {
    pub fn new(pairs: Arc<dyn BreedingPairRepository>, litters: Arc<dyn LitterRepository>) -> Self {
        Self { pairs, litters }
    }

    pub async fn handle(&self, cmd: RecordLitterCommand) -> Result<Litter, ColonyError> {
        if self.pairs.find_by_id(&cmd.breeding_pair_id).await?.is_none() {
            return Err(ColonyError::BreedingPairNotFound(cmd.breeding_pair_id));
        }

        let litter = Litter::new(LitterId::new(), cmd.breeding_pair_id, cmd.details);
        self.litters.save(&litter).await?;

        tracing::info!(
            litter_id = %litter.id(),
            pair_id = %litter.breeding_pair_id(),
            weaning_on = %litter.weaning_on(),
            "Litter recorded"
        );
        Ok(litter)
    }
}
