//! Litter repository port.

use async_trait::async_trait;

use crate::domain::colony::Litter;
use crate::domain::foundation::{BreedingPairId, DomainError, LitterId};

#[async_trait]
pub trait LitterRepository: Send + Sync {
    /// Save a new litter.
    async fn save(&self, litter: &Litter) -> Result<(), DomainError>;

    /// Update an existing litter's dates and counts. Separation flags are
    /// written only by `WeanedGroupRepository::save`.
    ///
    /// # Errors
    ///
    /// - `LitterNotFound` if the litter doesn't exist
    async fn update(&self, litter: &Litter) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &LitterId) -> Result<Option<Litter>, DomainError>;

    /// Litters of one pair, oldest birth first.
    async fn list_by_breeding_pair(
        &self,
        breeding_pair_id: &BreedingPairId,
    ) -> Result<Vec<Litter>, DomainError>;

    /// Weaning schedule: all litters, latest weaning date first.
    async fn list_by_weaning_date_desc(&self) -> Result<Vec<Litter>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn litter_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn LitterRepository) {}
    }
}
