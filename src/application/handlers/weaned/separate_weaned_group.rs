//! SeparateWeanedGroupHandler - Command handler for weaning one sex of a litter.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::handlers::cage::CageLabelService;
use crate::domain::colony::{ColonyError, Labeled, Sex, WeanedGroup};
use crate::domain::foundation::{LitterId, WeanedGroupId};
use crate::ports::{BreedingPairRepository, LitterRepository, WeanedGroupRepository};

/// Command to move the males or the females of a litter to their own cage.
#[derive(Debug, Clone)]
pub struct SeparateWeanedGroupCommand {
    pub litter_id: LitterId,
    pub sex: Sex,
    /// Cage chosen by the technician. `None` takes the next free label.
    pub cage_label: Option<String>,
    /// Defaults to the litter's weaning date.
    pub weaned_on: Option<NaiveDate>,
}

pub struct SeparateWeanedGroupHandler {
    pairs: Arc<dyn BreedingPairRepository>,
    litters: Arc<dyn LitterRepository>,
    groups: Arc<dyn WeanedGroupRepository>,
    cages: Arc<CageLabelService>,
}

impl SeparateWeanedGroupHandler {
    pub fn new(
        pairs: Arc<dyn BreedingPairRepository>,
        litters: Arc<dyn LitterRepository>,
        groups: Arc<dyn WeanedGroupRepository>,
        cages: Arc<CageLabelService>,
    ) -> Self {
        Self {
            pairs,
            litters,
            groups,
            cages,
        }
    }

    pub async fn handle(&self, cmd: SeparateWeanedGroupCommand) -> Result<WeanedGroup, ColonyError> {
        let litter = self
            .litters
            .find_by_id(&cmd.litter_id)
            .await?
            .ok_or(ColonyError::LitterNotFound(cmd.litter_id))?;

        // The store re-checks this in the same write as the insert.
        if litter.is_separated(cmd.sex) {
            return Err(ColonyError::AlreadySeparated {
                litter_id: cmd.litter_id,
                sex: cmd.sex,
            });
        }

        let pair = self
            .pairs
            .find_by_id(litter.breeding_pair_id())
            .await?
            .ok_or(ColonyError::BreedingPairNotFound(*litter.breeding_pair_id()))?;

        let weaned_on = cmd.weaned_on.unwrap_or_else(|| litter.weaning_on());
        let groups = &self.groups;
        let (pair_ref, litter_ref) = (&pair, &litter);

        let group = self
            .cages
            .with_cage_label(cmd.cage_label.as_deref(), pair.strain(), |label| {
                let group = WeanedGroup::separate(
                    WeanedGroupId::new(),
                    cmd.sex,
                    label,
                    pair_ref,
                    litter_ref,
                    weaned_on,
                );
                async move {
                    groups.save(&group).await?;
                    Ok::<_, ColonyError>(group)
                }
            })
            .await?;

        tracing::info!(
            group_id = %group.id(),
            litter_id = %litter.id(),
            sex = %cmd.sex,
            cage_label = %group.cage_label(),
            parents_label = %group.parents_label(),
            "Weaned group separated"
        );
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryColonyStore;
    use crate::application::handlers::test_support::{colony, date, litter_details, pair_details};
    use crate::domain::colony::{BreedingPair, CageLabel, Litter, RejectionReason, Strain};
    use crate::domain::foundation::{BreedingPairId, DomainError};
    use async_trait::async_trait;

    struct Fixture {
        handler: SeparateWeanedGroupHandler,
        store: InMemoryColonyStore,
        litter: Litter,
    }

    async fn fixture(pair_label: &str) -> Fixture {
        let (store, cages) = colony();
        let label = CageLabel::parse(pair_label).unwrap();
        let pair = BreedingPair::new(
            BreedingPairId::new(),
            label,
            pair_details(label.strain().unwrap()),
        );
        BreedingPairRepository::save(&store, &pair).await.unwrap();
        let litter = Litter::new(LitterId::new(), *pair.id(), litter_details(4, 3));
        LitterRepository::save(&store, &litter).await.unwrap();

        let shared = Arc::new(store.clone());
        Fixture {
            handler: SeparateWeanedGroupHandler::new(shared.clone(), shared.clone(), shared, cages),
            store,
            litter,
        }
    }

    fn cmd(litter: &Litter, sex: Sex, label: Option<&str>) -> SeparateWeanedGroupCommand {
        SeparateWeanedGroupCommand {
            litter_id: *litter.id(),
            sex,
            cage_label: label.map(String::from),
            weaned_on: None,
        }
    }

    #[tokio::test]
    async fn males_and_females_get_consecutive_cages() {
        let f = fixture("A1").await;
        let males = f.handler.handle(cmd(&f.litter, Sex::Male, None)).await.unwrap();
        let females = f.handler.handle(cmd(&f.litter, Sex::Female, None)).await.unwrap();

        assert_eq!(males.cage_label(), "A2");
        assert_eq!(males.count(), 4);
        assert_eq!(females.cage_label(), "A3");
        assert_eq!(females.count(), 3);
        assert_eq!(females.parents_label(), "A1");
        assert_eq!(females.weaned_on(), date(2024, 4, 29));
        assert_eq!(f.store.housed_count().await, 3);

        let litter = LitterRepository::find_by_id(&f.store, f.litter.id())
            .await
            .unwrap()
            .unwrap();
        assert!(litter.is_separated(Sex::Male));
        assert!(litter.is_separated(Sex::Female));
    }

    #[tokio::test]
    async fn second_separation_of_same_sex_fails() {
        let f = fixture("B1").await;
        f.handler.handle(cmd(&f.litter, Sex::Male, None)).await.unwrap();
        let err = f.handler.handle(cmd(&f.litter, Sex::Male, None)).await.unwrap_err();
        assert_eq!(
            err,
            ColonyError::AlreadySeparated {
                litter_id: *f.litter.id(),
                sex: Sex::Male
            }
        );
        assert_eq!(f.store.housed_count().await, 2);
    }

    /// Yields after every litter read so concurrent handlers interleave
    /// between the read and the write.
    struct YieldingLitters(InMemoryColonyStore);

    #[async_trait]
    impl LitterRepository for YieldingLitters {
        async fn save(&self, litter: &Litter) -> Result<(), DomainError> {
            LitterRepository::save(&self.0, litter).await
        }

        async fn update(&self, litter: &Litter) -> Result<(), DomainError> {
            LitterRepository::update(&self.0, litter).await
        }

        async fn find_by_id(&self, id: &LitterId) -> Result<Option<Litter>, DomainError> {
            let found = LitterRepository::find_by_id(&self.0, id).await;
            tokio::task::yield_now().await;
            found
        }

        async fn list_by_breeding_pair(
            &self,
            breeding_pair_id: &BreedingPairId,
        ) -> Result<Vec<Litter>, DomainError> {
            self.0.list_by_breeding_pair(breeding_pair_id).await
        }

        async fn list_by_weaning_date_desc(&self) -> Result<Vec<Litter>, DomainError> {
            self.0.list_by_weaning_date_desc().await
        }
    }

    #[tokio::test]
    async fn concurrent_separations_of_one_sex_house_one_group() {
        let f = fixture("A1").await;
        let shared = Arc::new(f.store.clone());
        let handler = SeparateWeanedGroupHandler::new(
            shared.clone(),
            Arc::new(YieldingLitters(f.store.clone())),
            shared,
            Arc::new(CageLabelService::new(Arc::new(f.store.clone()))),
        );

        let (first, second) = tokio::join!(
            handler.handle(cmd(&f.litter, Sex::Male, None)),
            handler.handle(cmd(&f.litter, Sex::Male, None)),
        );

        let lost = match (first, second) {
            (Ok(_), Err(e)) | (Err(e), Ok(_)) => e,
            other => panic!("expected exactly one separation, got {other:?}"),
        };
        assert_eq!(
            lost,
            ColonyError::AlreadySeparated {
                litter_id: *f.litter.id(),
                sex: Sex::Male
            }
        );
        assert_eq!(f.store.housed_count().await, 2);
    }

    #[tokio::test]
    async fn requested_label_passes_the_gate() {
        let f = fixture("C1").await;
        let err = f
            .handler
            .handle(cmd(&f.litter, Sex::Female, Some("C1")))
            .await
            .unwrap_err();
        match err {
            ColonyError::CageLabelRejected(r) => assert!(r.has_reason(RejectionReason::InUse)),
            other => panic!("unexpected: {other:?}"),
        }

        let group = f
            .handler
            .handle(cmd(&f.litter, Sex::Female, Some("C9")))
            .await
            .unwrap();
        assert_eq!(group.cage_label(), "C9");
        assert_eq!(group.strain(), Strain::Rag1Het);
    }

    #[tokio::test]
    async fn rejected_label_leaves_litter_unseparated() {
        let f = fixture("A1").await;
        assert!(f
            .handler
            .handle(cmd(&f.litter, Sex::Male, Some("B4")))
            .await
            .is_err());
        assert!(f.handler.handle(cmd(&f.litter, Sex::Male, None)).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_litter_is_not_found() {
        let f = fixture("A1").await;
        let other = Litter::new(LitterId::new(), BreedingPairId::new(), litter_details(1, 1));
        let err = f.handler.handle(cmd(&other, Sex::Male, None)).await.unwrap_err();
        assert_eq!(err, ColonyError::LitterNotFound(*other.id()));
    }
}
