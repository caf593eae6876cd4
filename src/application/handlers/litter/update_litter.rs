//! UpdateLitterHandler - Command handler for correcting litter dates and counts.

use std::sync::Arc;

use crate::domain::colony::{ColonyError, Litter, LitterDetails};
use crate::domain::foundation::LitterId;
use crate::ports::LitterRepository;

#[derive(Debug, Clone)]
pub struct UpdateLitterCommand {
    pub id: LitterId,
    pub details: LitterDetails,
}

pub struct UpdateLitterHandler {
    repository: Arc<dyn LitterRepository>,
}

impl UpdateLitterHandler {
    pub fn new(repository: Arc<dyn LitterRepository>) -> Self {
        Self { repository }
    }

    /// Separation flags are left untouched.
    pub async fn handle(&self, cmd: UpdateLitterCommand) -> Result<Litter, ColonyError> {
        let mut litter = self
            .repository
            .find_by_id(&cmd.id)
            .await?
            .ok_or(ColonyError::LitterNotFound(cmd.id))?;

        litter.revise(cmd.details);
        self.repository.update(&litter).await?;

        tracing::info!(litter_id = %litter.id(), "Litter updated");
        Ok(litter)
    }
}
