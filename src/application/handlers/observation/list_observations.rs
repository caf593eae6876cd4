//! ListObservationsHandler - Query handler for a group's observation log.

use std::sync::Arc;

use crate::domain::colony::{ColonyError, Observation};
use crate::domain::foundation::WeanedGroupId;
use crate::ports::{ObservationRepository, WeanedGroupRepository};

pub struct ListObservationsHandler {
    groups: Arc<dyn WeanedGroupRepository>,
    observations: Arc<dyn ObservationRepository>,
}

impl ListObservationsHandler {
    pub fn new(
        groups: Arc<dyn WeanedGroupRepository>,
        observations: Arc<dyn ObservationRepository>,
    ) -> Self {
        Self {
            groups,
            observations,
        }
    }

    /// Oldest first.
    pub async fn handle(&self, group_id: WeanedGroupId) -> Result<Vec<Observation>, ColonyError> {
        if self.groups.find_by_id(&group_id).await?.is_none() {
            return Err(ColonyError::WeanedGroupNotFound(group_id));
        }
        Ok(self.observations.list_for_group(&group_id).await?)
    }
}
