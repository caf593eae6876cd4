//! Observation repository port.

use async_trait::async_trait;

use crate::domain::colony::Observation;
use crate::domain::foundation::{DomainError, WeanedGroupId};

#[async_trait]
pub trait ObservationRepository: Send + Sync {
    async fn save(&self, observation: &Observation) -> Result<(), DomainError>;

    /// Notes for one group, oldest first.
    async fn list_for_group(
        &self,
        weaned_group_id: &WeanedGroupId,
    ) -> Result<Vec<Observation>, DomainError>;
}
