//! CreateBreedingPairHandler - Command handler for setting up a breeding pair.

use std::sync::Arc;

use crate::application::handlers::cage::CageLabelService;
use crate::domain::colony::{BreedingPair, BreedingPairDetails, ColonyError, Labeled};
use crate::domain::foundation::BreedingPairId;
use crate::ports::BreedingPairRepository;

/// Command to set up a breeding pair.
#[derive(Debug, Clone)]
pub struct CreateBreedingPairCommand {
    /// Cage chosen by the technician. `None` takes the next free label.
    pub cage_label: Option<String>,
    pub details: BreedingPairDetails,
}

/// Handler for creating breeding pairs.
pub struct CreateBreedingPairHandler {
    repository: Arc<dyn BreedingPairRepository>,
    cages: Arc<CageLabelService>,
}

impl CreateBreedingPairHandler {
    pub fn new(repository: Arc<dyn BreedingPairRepository>, cages: Arc<CageLabelService>) -> Self {
        Self { repository, cages }
    }

    pub async fn handle(&self, cmd: CreateBreedingPairCommand) -> Result<BreedingPair, ColonyError> {
        let details = cmd.details;
        let repository = &self.repository;

        let pair = self
            .cages
            .with_cage_label(cmd.cage_label.as_deref(), details.strain, |label| {
                let pair = BreedingPair::new(BreedingPairId::new(), label, details.clone());
                async move {
                    repository.save(&pair).await?;
                    Ok::<_, ColonyError>(pair)
                }
            })
            .await?;

        tracing::info!(
            pair_id = %pair.id(),
            cage_label = %pair.cage_label(),
            strain = %pair.strain(),
            "Breeding pair created"
        );
        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{colony, pair_details};
    use crate::domain::colony::{RejectionReason, Strain};

    fn handler() -> (CreateBreedingPairHandler, crate::adapters::memory::InMemoryColonyStore) {
        let (store, cages) = colony();
        (CreateBreedingPairHandler::new(Arc::new(store.clone()), cages), store)
    }

    fn cmd(label: Option<&str>, strain: Strain) -> CreateBreedingPairCommand {
        CreateBreedingPairCommand {
            cage_label: label.map(String::from),
            details: pair_details(strain),
        }
    }

    #[tokio::test]
    async fn allocates_labels_in_sequence_when_none_given() {
        let (handler, _) = handler();
        let first = handler.handle(cmd(None, Strain::C57B6J)).await.unwrap();
        let second = handler.handle(cmd(None, Strain::C57B6J)).await.unwrap();
        let other = handler.handle(cmd(None, Strain::Rag1Het)).await.unwrap();

        assert_eq!(first.cage_label(), "A1");
        assert_eq!(second.cage_label(), "A2");
        assert_eq!(other.cage_label(), "C1");
    }

    #[tokio::test]
    async fn accepts_free_label_with_matching_prefix() {
        let (handler, store) = handler();
        let pair = handler.handle(cmd(Some("B12"), Strain::Cd45_1)).await.unwrap();
        assert_eq!(pair.cage_label(), "B12");
        assert_eq!(store.housed_count().await, 1);
    }

    #[tokio::test]
    async fn rejects_label_of_another_strain() {
        let (handler, store) = handler();
        let err = handler.handle(cmd(Some("A1"), Strain::Cd45_1)).await.unwrap_err();
        match err {
            ColonyError::CageLabelRejected(r) => assert!(r.has_reason(RejectionReason::WrongPrefix)),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(store.housed_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_label_already_in_use() {
        let (handler, _) = handler();
        handler.handle(cmd(Some("A3"), Strain::C57B6J)).await.unwrap();
        let err = handler.handle(cmd(Some("A3"), Strain::C57B6J)).await.unwrap_err();
        match err {
            ColonyError::CageLabelRejected(r) => assert!(r.has_reason(RejectionReason::InUse)),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn allocation_skips_past_requested_labels() {
        let (handler, _) = handler();
        handler.handle(cmd(Some("A1"), Strain::C57B6J)).await.unwrap();
        handler.handle(cmd(Some("A3"), Strain::C57B6J)).await.unwrap();
        let pair = handler.handle(cmd(None, Strain::C57B6J)).await.unwrap();
        assert_eq!(pair.cage_label(), "A2");
    }
}
