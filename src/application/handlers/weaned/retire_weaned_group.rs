//! RetireWeanedGroupHandler - Command handler for removing a weaned group.

use std::sync::Arc;

use crate::domain::colony::ColonyError;
use crate::domain::foundation::WeanedGroupId;
use crate::ports::WeanedGroupRepository;

/// Deletes a group and its observations. Its cage label becomes free.
pub struct RetireWeanedGroupHandler {
    repository: Arc<dyn WeanedGroupRepository>,
}

impl RetireWeanedGroupHandler {
    pub fn new(repository: Arc<dyn WeanedGroupRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: WeanedGroupId) -> Result<(), ColonyError> {
        self.repository.delete(&id).await?;
        tracing::info!(group_id = %id, "Weaned group retired");
        Ok(())
    }
}
