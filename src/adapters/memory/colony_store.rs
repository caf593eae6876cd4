//! In-memory colony store.
//!
//! One lock guards every record kind so that cage label uniqueness can be
//! checked across pairs and groups atomically with the write. Useful for
//! tests and for running without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::colony::{
    BreedingPair, HousingKind, Labeled, Litter, Observation, Sex, WeanedGroup,
};
use crate::domain::foundation::{
    BreedingPairId, DomainError, ErrorCode, LitterId, WeanedGroupId,
};
use crate::ports::{
    BreedingPairRepository, CageLabelSource, LitterRepository, ObservationRepository,
    WeanedGroupRepository,
};

#[derive(Debug, Default)]
struct ColonyState {
    pairs: HashMap<BreedingPairId, BreedingPair>,
    litters: HashMap<LitterId, Litter>,
    groups: HashMap<WeanedGroupId, WeanedGroup>,
    observations: Vec<Observation>,
}

impl ColonyState {
    /// Whether any live record other than `owner` holds `label`.
    fn label_taken(&self, label: &str, owner: Option<&Uuid>) -> bool {
        let pair_holds = self
            .pairs
            .values()
            .any(|p| p.cage_label() == label && Some(p.id().as_uuid()) != owner);
        let group_holds = self
            .groups
            .values()
            .any(|g| g.cage_label() == label && Some(g.id().as_uuid()) != owner);
        pair_holds || group_holds
    }
}

/// In-memory implementation of every colony persistence port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryColonyStore {
    state: Arc<RwLock<ColonyState>>,
}

impl InMemoryColonyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records holding a cage label.
    pub async fn housed_count(&self) -> usize {
        let state = self.state.read().await;
        state.pairs.len() + state.groups.len()
    }
}

fn not_found(code: ErrorCode, what: &str, id: impl ToString) -> DomainError {
    let id = id.to_string();
    DomainError::new(code, format!("{} not found: {}", what, id)).with_detail("id", id)
}

#[async_trait]
impl BreedingPairRepository for InMemoryColonyStore {
    async fn save(&self, pair: &BreedingPair) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.label_taken(pair.cage_label(), None) {
            return Err(DomainError::cage_label_conflict(pair.cage_label()));
        }
        state.pairs.insert(*pair.id(), pair.clone());
        Ok(())
    }

    async fn update(&self, pair: &BreedingPair) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.pairs.contains_key(pair.id()) {
            return Err(not_found(
                ErrorCode::BreedingPairNotFound,
                "Breeding pair",
                pair.id(),
            ));
        }
        if state.label_taken(pair.cage_label(), Some(pair.id().as_uuid())) {
            return Err(DomainError::cage_label_conflict(pair.cage_label()));
        }
        state.pairs.insert(*pair.id(), pair.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &BreedingPairId) -> Result<Option<BreedingPair>, DomainError> {
        Ok(self.state.read().await.pairs.get(id).cloned())
    }

    async fn list_recent_first(&self) -> Result<Vec<BreedingPair>, DomainError> {
        let mut pairs: Vec<BreedingPair> =
            self.state.read().await.pairs.values().cloned().collect();
        pairs.sort_by(|a, b| {
            b.paired_on()
                .cmp(&a.paired_on())
                .then_with(|| b.created_at().cmp(a.created_at()))
        });
        Ok(pairs)
    }

    async fn delete(&self, id: &BreedingPairId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.pairs.remove(id).is_none() {
            return Err(not_found(ErrorCode::BreedingPairNotFound, "Breeding pair", id));
        }
        state.litters.retain(|_, l| l.breeding_pair_id() != id);
        for group in state.groups.values_mut() {
            if group.breeding_pair_id() == Some(id) {
                group.orphan();
            }
        }
        Ok(())
    }
}

#[async_trait]
impl LitterRepository for InMemoryColonyStore {
    async fn save(&self, litter: &Litter) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.pairs.contains_key(litter.breeding_pair_id()) {
            return Err(not_found(
                ErrorCode::BreedingPairNotFound,
                "Breeding pair",
                litter.breeding_pair_id(),
            ));
        }
        state.litters.insert(*litter.id(), litter.clone());
        Ok(())
    }

    async fn update(&self, litter: &Litter) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        match state.litters.get_mut(litter.id()) {
            Some(existing) => {
                let mut revised = litter.clone();
                revised.keep_separations(existing);
                *existing = revised;
                Ok(())
            }
            None => Err(not_found(ErrorCode::LitterNotFound, "Litter", litter.id())),
        }
    }

    async fn find_by_id(&self, id: &LitterId) -> Result<Option<Litter>, DomainError> {
        Ok(self.state.read().await.litters.get(id).cloned())
    }

    async fn list_by_breeding_pair(
        &self,
        breeding_pair_id: &BreedingPairId,
    ) -> Result<Vec<Litter>, DomainError> {
        let mut litters: Vec<Litter> = self
            .state
            .read()
            .await
            .litters
            .values()
            .filter(|l| l.breeding_pair_id() == breeding_pair_id)
            .cloned()
            .collect();
        litters.sort_by_key(|l| l.born_on());
        Ok(litters)
    }

    async fn list_by_weaning_date_desc(&self) -> Result<Vec<Litter>, DomainError> {
        let mut litters: Vec<Litter> =
            self.state.read().await.litters.values().cloned().collect();
        litters.sort_by(|a, b| b.weaning_on().cmp(&a.weaning_on()));
        Ok(litters)
    }
}

#[async_trait]
impl WeanedGroupRepository for InMemoryColonyStore {
    async fn save(&self, group: &WeanedGroup) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if let Some(litter_id) = group.litter_id() {
            let litter = state
                .litters
                .get(litter_id)
                .ok_or_else(|| not_found(ErrorCode::LitterNotFound, "Litter", litter_id))?;
            if litter.is_separated(group.sex()) {
                return Err(DomainError::litter_already_separated(litter_id, group.sex()));
            }
        }
        if state.label_taken(group.cage_label(), None) {
            return Err(DomainError::cage_label_conflict(group.cage_label()));
        }

        if let Some(litter) = group.litter_id().and_then(|id| state.litters.get_mut(id)) {
            litter
                .mark_separated(group.sex())
                .map_err(|e| DomainError::new(ErrorCode::InternalError, e.to_string()))?;
        }
        state.groups.insert(*group.id(), group.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &WeanedGroupId) -> Result<Option<WeanedGroup>, DomainError> {
        Ok(self.state.read().await.groups.get(id).cloned())
    }

    async fn list_by_strain(&self) -> Result<Vec<WeanedGroup>, DomainError> {
        let mut groups: Vec<WeanedGroup> =
            self.state.read().await.groups.values().cloned().collect();
        groups.sort_by(|a, b| {
            a.strain()
                .name()
                .cmp(b.strain().name())
                .then_with(|| a.cage_label().cmp(b.cage_label()))
        });
        Ok(groups)
    }

    async fn delete(&self, id: &WeanedGroupId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if state.groups.remove(id).is_none() {
            return Err(not_found(ErrorCode::WeanedGroupNotFound, "Weaned group", id));
        }
        state.observations.retain(|o| o.weaned_group_id() != id);
        Ok(())
    }
}

#[async_trait]
impl ObservationRepository for InMemoryColonyStore {
    async fn save(&self, observation: &Observation) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.groups.contains_key(observation.weaned_group_id()) {
            return Err(not_found(
                ErrorCode::WeanedGroupNotFound,
                "Weaned group",
                observation.weaned_group_id(),
            ));
        }
        state.observations.push(observation.clone());
        Ok(())
    }

    async fn list_for_group(
        &self,
        weaned_group_id: &WeanedGroupId,
    ) -> Result<Vec<Observation>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .observations
            .iter()
            .filter(|o| o.weaned_group_id() == weaned_group_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CageLabelSource for InMemoryColonyStore {
    async fn cage_labels(&self, kind: HousingKind) -> Result<Vec<String>, DomainError> {
        let state = self.state.read().await;
        let labels = match kind {
            HousingKind::BreedingPair => state
                .pairs
                .values()
                .map(|p| p.cage_label().to_string())
                .collect(),
            HousingKind::MaleGroup | HousingKind::FemaleGroup => {
                let sex = if kind == HousingKind::MaleGroup {
                    Sex::Male
                } else {
                    Sex::Female
                };
                state
                    .groups
                    .values()
                    .filter(|g| g.sex() == sex)
                    .map(|g| g.cage_label().to_string())
                    .collect()
            }
        };
        Ok(labels)
    }
}
