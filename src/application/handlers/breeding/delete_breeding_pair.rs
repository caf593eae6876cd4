//! DeleteBreedingPairHandler - Command handler for retiring a breeding pair.

use std::sync::Arc;

use crate::domain::colony::ColonyError;
use crate::domain::foundation::BreedingPairId;
use crate::ports::BreedingPairRepository;

/// Handler for deleting breeding pairs.
///
/// The pair's litters go with it and its cage label becomes free. Weaned
/// groups already separated from it stay housed and keep the parents' label.
pub struct DeleteBreedingPairHandler {
    repository: Arc<dyn BreedingPairRepository>,
}

impl DeleteBreedingPairHandler {
    pub fn new(repository: Arc<dyn BreedingPairRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: BreedingPairId) -> Result<(), ColonyError> {
        self.repository.delete(&id).await?;
        tracing::info!(pair_id = %id, "Breeding pair deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{colony, pair_details};
    use crate::domain::colony::{BreedingPair, CageLabel, Strain};

    #[tokio::test]
    async fn deleting_frees_the_cage_label() {
        let (store, cages) = colony();
        let pair = BreedingPair::new(
            BreedingPairId::new(),
            CageLabel::parse("C1").unwrap(),
            pair_details(Strain::Rag1Het),
        );
        BreedingPairRepository::save(&store, &pair).await.unwrap();
        assert!(cages.is_label_in_use("C1").await.unwrap());

        DeleteBreedingPairHandler::new(Arc::new(store))
            .handle(*pair.id())
            .await
            .unwrap();

        assert!(!cages.is_label_in_use("C1").await.unwrap());
        assert_eq!(cages.next_available_label("RAG1+/-").await.unwrap().to_string(), "C1");
    }

    #[tokio::test]
    async fn unknown_pair_is_not_found() {
        let (store, _) = colony();
        let id = BreedingPairId::new();
        let err = DeleteBreedingPairHandler::new(Arc::new(store))
            .handle(id)
            .await
            .unwrap_err();
        assert_eq!(err, ColonyError::BreedingPairNotFound(id));
    }
}
