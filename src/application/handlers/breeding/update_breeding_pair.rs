//! UpdateBreedingPairHandler - Command handler for editing a breeding pair.

use std::sync::Arc;

use crate::application::handlers::cage::CageLabelService;
use crate::domain::colony::{BreedingPair, BreedingPairDetails, ColonyError, Labeled};
use crate::domain::foundation::BreedingPairId;
use crate::ports::BreedingPairRepository;

/// Command to edit a breeding pair.
#[derive(Debug, Clone)]
pub struct UpdateBreedingPairCommand {
    pub id: BreedingPairId,
    /// New cage. `None` keeps the current one.
    pub cage_label: Option<String>,
    pub details: BreedingPairDetails,
}

/// Handler for editing breeding pairs.
pub struct UpdateBreedingPairHandler {
    repository: Arc<dyn BreedingPairRepository>,
    cages: Arc<CageLabelService>,
}

impl UpdateBreedingPairHandler {
    pub fn new(repository: Arc<dyn BreedingPairRepository>, cages: Arc<CageLabelService>) -> Self {
        Self { repository, cages }
    }

    /// The gate runs whenever the label or the strain changes; the pair's own
    /// current label never counts as in use.
    pub async fn handle(&self, cmd: UpdateBreedingPairCommand) -> Result<BreedingPair, ColonyError> {
        let mut pair = self
            .repository
            .find_by_id(&cmd.id)
            .await?
            .ok_or(ColonyError::BreedingPairNotFound(cmd.id))?;

        let current = pair.cage_label().to_string();
        let target = cmd.cage_label.unwrap_or_else(|| current.clone());
        let strain_changed = cmd.details.strain != pair.strain();

        if target != current || strain_changed {
            let label = self
                .cages
                .validate_relabel(&current, &target, cmd.details.strain)
                .await?;
            pair.relabel(label);
        }
        pair.revise(cmd.details);

        self.repository.update(&pair).await?;

        tracing::info!(
            pair_id = %pair.id(),
            from = %current,
            to = %pair.cage_label(),
            "Breeding pair updated"
        );
        Ok(pair)
    }
}
