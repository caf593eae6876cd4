//! Weaned groups (machos / hembras).
//!
//! When a litter is weaned its males and its females are each moved to a cage
//! of their own. A group keeps its lineage through the parents' cage label even
//! after the breeding pair record is gone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BreedingPair, CageLabel, HousingKind, Labeled, Litter, Strain};
use crate::domain::foundation::{BreedingPairId, LitterId, WeanedGroupId};

/// Sex of a weaned group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// The housing kind a group of this sex occupies.
    pub fn housing_kind(&self) -> HousingKind {
        match self {
            Sex::Male => HousingKind::MaleGroup,
            Sex::Female => HousingKind::FemaleGroup,
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(format!("Invalid sex: {}", other)),
        }
    }
}

/// Same-sex animals from one litter sharing a cage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeanedGroup {
    id: WeanedGroupId,
    sex: Sex,
    cage_label: String,
    strain: Strain,
    born_on: NaiveDate,
    weaned_on: NaiveDate,
    count: u32,
    parents_label: String,
    breeding_pair_id: Option<BreedingPairId>,
    litter_id: Option<LitterId>,
}

impl WeanedGroup {
    /// Separate one sex of `litter` into the cage `cage_label`.
    ///
    /// Strain and parents' label come from the pair, birth date and head count
    /// from the litter.
    pub fn separate(
        id: WeanedGroupId,
        sex: Sex,
        cage_label: CageLabel,
        pair: &BreedingPair,
        litter: &Litter,
        weaned_on: NaiveDate,
    ) -> Self {
        Self {
            id,
            sex,
            cage_label: cage_label.to_string(),
            strain: pair.strain(),
            born_on: litter.born_on(),
            weaned_on,
            count: litter.head_count(sex),
            parents_label: pair.cage_label().to_string(),
            breeding_pair_id: Some(*pair.id()),
            litter_id: Some(*litter.id()),
        }
    }

    /// Reconstitute a group from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: WeanedGroupId,
        sex: Sex,
        cage_label: String,
        strain: Strain,
        born_on: NaiveDate,
        weaned_on: NaiveDate,
        count: u32,
        parents_label: String,
        breeding_pair_id: Option<BreedingPairId>,
        litter_id: Option<LitterId>,
    ) -> Self {
        Self {
            id,
            sex,
            cage_label,
            strain,
            born_on,
            weaned_on,
            count,
            parents_label,
            breeding_pair_id,
            litter_id,
        }
    }

    pub fn id(&self) -> &WeanedGroupId {
        &self.id
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn strain(&self) -> Strain {
        self.strain
    }

    pub fn born_on(&self) -> NaiveDate {
        self.born_on
    }

    pub fn weaned_on(&self) -> NaiveDate {
        self.weaned_on
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn parents_label(&self) -> &str {
        &self.parents_label
    }

    pub fn breeding_pair_id(&self) -> Option<&BreedingPairId> {
        self.breeding_pair_id.as_ref()
    }

    pub fn litter_id(&self) -> Option<&LitterId> {
        self.litter_id.as_ref()
    }

    /// Drop the link to a deleted breeding pair and its litters.
    pub fn orphan(&mut self) {
        self.breeding_pair_id = None;
        self.litter_id = None;
    }
}

impl Labeled for WeanedGroup {
    fn cage_label(&self) -> &str {
        &self.cage_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::colony::{BreedingPairDetails, LitterDetails};

    fn pair() -> BreedingPair {
        BreedingPair::new(
            BreedingPairId::new(),
            CageLabel::parse("B3").unwrap(),
            BreedingPairDetails {
                strain: Strain::Cd45_1,
                paired_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                males: 1,
                females: 1,
            },
        )
    }

    #[test]
    fn separate_inherits_from_pair_and_litter() {
        let pair = pair();
        let litter = Litter::new(
            LitterId::new(),
            *pair.id(),
            LitterDetails {
                born_on: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                weaning_on: None,
                males: 5,
                females: 2,
            },
        );
        let weaned_on = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

        let group = WeanedGroup::separate(
            WeanedGroupId::new(),
            Sex::Female,
            CageLabel::parse("B4").unwrap(),
            &pair,
            &litter,
            weaned_on,
        );

        assert_eq!(group.cage_label(), "B4");
        assert_eq!(group.strain(), Strain::Cd45_1);
        assert_eq!(group.count(), 2);
        assert_eq!(group.parents_label(), "B3");
        assert_eq!(group.born_on(), litter.born_on());
        assert_eq!(group.breeding_pair_id(), Some(pair.id()));
        assert_eq!(group.litter_id(), Some(litter.id()));
    }

    #[test]
    fn sex_maps_to_housing_kind() {
        assert_eq!(Sex::Male.housing_kind(), HousingKind::MaleGroup);
        assert_eq!(Sex::Female.housing_kind(), HousingKind::FemaleGroup);
    }

    #[test]
    fn sex_parses_lowercase_names() {
        assert_eq!("male".parse::<Sex>(), Ok(Sex::Male));
        assert!("Male".parse::<Sex>().is_err());
    }
}
