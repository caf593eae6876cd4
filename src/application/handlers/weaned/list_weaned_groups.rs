//! ListWeanedGroupsHandler - Query handler for the weaned group register.

use std::sync::Arc;

use crate::domain::colony::{ColonyError, WeanedGroup};
use crate::ports::WeanedGroupRepository;

/// Lists every housed group ordered by strain, then cage label.
pub struct ListWeanedGroupsHandler {
    repository: Arc<dyn WeanedGroupRepository>,
}

impl ListWeanedGroupsHandler {
    pub fn new(repository: Arc<dyn WeanedGroupRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<WeanedGroup>, ColonyError> {
        Ok(self.repository.list_by_strain().await?)
    }
}
