//! Breeding pair repository port.
//!
//! Implementations must register the pair's cage label in the same unit of
//! work as the record itself, so that two records can never commit the same
//! label.

use async_trait::async_trait;

use crate::domain::colony::BreedingPair;
use crate::domain::foundation::{BreedingPairId, DomainError};

/// Repository port for BreedingPair persistence.
#[async_trait]
pub trait BreedingPairRepository: Send + Sync {
    /// Save a new pair.
    ///
    /// # Errors
    ///
    /// - `CageLabelConflict` if any live record holds the label
    /// - `DatabaseError` on persistence failure
    async fn save(&self, pair: &BreedingPair) -> Result<(), DomainError>;

    /// Update an existing pair, moving its label registration if it changed.
    ///
    /// # Errors
    ///
    /// - `BreedingPairNotFound` if the pair doesn't exist
    /// - `CageLabelConflict` if the new label is held elsewhere
    async fn update(&self, pair: &BreedingPair) -> Result<(), DomainError>;

    /// Find a pair by its ID.
    async fn find_by_id(&self, id: &BreedingPairId) -> Result<Option<BreedingPair>, DomainError>;

    /// All pairs, most recent pairing date first.
    async fn list_recent_first(&self) -> Result<Vec<BreedingPair>, DomainError>;

    /// Delete a pair and its litters, releasing its cage label. Weaned groups
    /// descended from it are kept and lose their link to the pair.
    ///
    /// # Errors
    ///
    /// - `BreedingPairNotFound` if the pair doesn't exist
    async fn delete(&self, id: &BreedingPairId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breeding_pair_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn BreedingPairRepository) {}
    }
}
