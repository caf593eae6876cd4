//! AddObservationHandler - Command handler for noting something about a group.

use std::sync::Arc;

use crate::domain::colony::{ColonyError, Observation};
use crate::domain::foundation::{ObservationId, WeanedGroupId};
use crate::ports::{ObservationRepository, WeanedGroupRepository};

#[derive(Debug, Clone)]
pub struct AddObservationCommand {
    pub weaned_group_id: WeanedGroupId,
    pub note: String,
}

pub struct AddObservationHandler {
    groups: Arc<dyn WeanedGroupRepository>,
    observations: Arc<dyn ObservationRepository>,
}

impl AddObservationHandler {
    pub fn new(
        groups: Arc<dyn WeanedGroupRepository>,
        observations: Arc<dyn ObservationRepository>,
    ) -> Self {
        Self {
            groups,
            observations,
        }
    }

    pub async fn handle(&self, cmd: AddObservationCommand) -> Result<Observation, ColonyError> {
        if self.groups.find_by_id(&cmd.weaned_group_id).await?.is_none() {
            return Err(ColonyError::WeanedGroupNotFound(cmd.weaned_group_id));
        }

        let observation = Observation::new(ObservationId::new(), cmd.weaned_group_id, cmd.note)?;
        self.observations.save(&observation).await?;

        tracing::debug!(
            observation_id = %observation.id(),
            group_id = %observation.weaned_group_id(),
            "Observation recorded"
        );
        Ok(observation)
    }
}
