//! Weaned group repository port.
//!
//! Like breeding pairs, groups hold cage labels; the label is registered and
//! released together with the record.

use async_trait::async_trait;

use crate::domain::colony::WeanedGroup;
use crate::domain::foundation::{DomainError, WeanedGroupId};

#[async_trait]
pub trait WeanedGroupRepository: Send + Sync {
    /// Save a new group. When the group came from a litter, that litter's
    /// sex is marked separated in the same write.
    ///
    /// # Errors
    ///
    /// - `LitterNotFound` if the source litter doesn't exist
    /// - `LitterAlreadySeparated` if that sex already has a cage
    /// - `CageLabelConflict` if any live record holds the label
    async fn save(&self, group: &WeanedGroup) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &WeanedGroupId) -> Result<Option<WeanedGroup>, DomainError>;

    /// All groups ordered by strain name, then cage label.
    async fn list_by_strain(&self) -> Result<Vec<WeanedGroup>, DomainError>;

    /// Retire a group, releasing its cage label. Its observations go with it.
    ///
    /// # Errors
    ///
    /// - `WeanedGroupNotFound` if the group doesn't exist
    async fn delete(&self, id: &WeanedGroupId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weaned_group_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn WeanedGroupRepository) {}
    }
}
