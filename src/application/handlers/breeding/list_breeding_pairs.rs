//! ListBreedingPairsHandler - Query handler for the breeding pair register.

use std::sync::Arc;

use crate::domain::colony::{BreedingPair, ColonyError};
use crate::ports::BreedingPairRepository;

/// Lists every live pair, most recently paired first.
pub struct ListBreedingPairsHandler {
    repository: Arc<dyn BreedingPairRepository>,
}

impl ListBreedingPairsHandler {
    pub fn new(repository: Arc<dyn BreedingPairRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<BreedingPair>, ColonyError> {
        Ok(self.repository.list_recent_first().await?)
    }
}
