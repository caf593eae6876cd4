//! Breeding pair aggregate (cruza).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CageLabel, Labeled, Strain};
use crate::domain::foundation::{BreedingPairId, Timestamp};

/// Founder animals of one strain set up together in a cage.
///
/// # Invariants
///
/// - `cage_label` was well-formed when assigned
/// - no other live record holds the same label (enforced by the store)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedingPair {
    id: BreedingPairId,
    cage_label: String,
    strain: Strain,
    paired_on: NaiveDate,
    males: u32,
    females: u32,
    created_at: Timestamp,
}

/// Editable fields of a breeding pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedingPairDetails {
    pub strain: Strain,
    pub paired_on: NaiveDate,
    pub males: u32,
    pub females: u32,
}

impl BreedingPair {
    /// Set up a new pair in the given cage.
    pub fn new(id: BreedingPairId, cage_label: CageLabel, details: BreedingPairDetails) -> Self {
        Self {
            id,
            cage_label: cage_label.to_string(),
            strain: details.strain,
            paired_on: details.paired_on,
            males: details.males,
            females: details.females,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a pair from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: BreedingPairId,
        cage_label: String,
        strain: Strain,
        paired_on: NaiveDate,
        males: u32,
        females: u32,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            cage_label,
            strain,
            paired_on,
            males,
            females,
            created_at,
        }
    }

    pub fn id(&self) -> &BreedingPairId {
        &self.id
    }

    pub fn strain(&self) -> Strain {
        self.strain
    }

    pub fn paired_on(&self) -> NaiveDate {
        self.paired_on
    }

    pub fn males(&self) -> u32 {
        self.males
    }

    pub fn females(&self) -> u32 {
        self.females
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Move the pair to another cage. Returns the previous label.
    pub fn relabel(&mut self, cage_label: CageLabel) -> String {
        std::mem::replace(&mut self.cage_label, cage_label.to_string())
    }

    /// Overwrite strain, pairing date and founder counts.
    pub fn revise(&mut self, details: BreedingPairDetails) {
        self.strain = details.strain;
        self.paired_on = details.paired_on;
        self.males = details.males;
        self.females = details.females;
    }
}

impl Labeled for BreedingPair {
    fn cage_label(&self) -> &str {
        &self.cage_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> BreedingPairDetails {
        BreedingPairDetails {
            strain: Strain::C57B6J,
            paired_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            males: 1,
            females: 2,
        }
    }

    #[test]
    fn new_pair_stores_canonical_label() {
        let pair = BreedingPair::new(
            BreedingPairId::new(),
            CageLabel::parse("A4").unwrap(),
            details(),
        );
        assert_eq!(pair.cage_label(), "A4");
        assert_eq!(pair.strain(), Strain::C57B6J);
        assert_eq!(pair.males(), 1);
        assert_eq!(pair.females(), 2);
    }

    #[test]
    fn relabel_returns_previous_label() {
        let mut pair = BreedingPair::new(
            BreedingPairId::new(),
            CageLabel::parse("A4").unwrap(),
            details(),
        );
        let old = pair.relabel(CageLabel::parse("A9").unwrap());
        assert_eq!(old, "A4");
        assert_eq!(pair.cage_label(), "A9");
    }

    #[test]
    fn revise_overwrites_details() {
        let mut pair = BreedingPair::new(
            BreedingPairId::new(),
            CageLabel::parse("A4").unwrap(),
            details(),
        );
        pair.revise(BreedingPairDetails {
            strain: Strain::Cd45_1,
            paired_on: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            males: 2,
            females: 3,
        });
        assert_eq!(pair.strain(), Strain::Cd45_1);
        assert_eq!(pair.females(), 3);
    }
}
