//! Litter aggregate (camada).

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{ColonyError, Sex};
use crate::domain::foundation::{BreedingPairId, LitterId};

/// Days from birth to the default weaning date.
pub const WEANING_AGE_DAYS: i64 = 28;

/// Pups born to a breeding pair, tracked until they are separated by sex.
///
/// # Invariants
///
/// - each sex is separated at most once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Litter {
    id: LitterId,
    breeding_pair_id: BreedingPairId,
    born_on: NaiveDate,
    weaning_on: NaiveDate,
    males: u32,
    females: u32,
    males_separated: bool,
    females_separated: bool,
}

/// Editable fields of a litter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LitterDetails {
    pub born_on: NaiveDate,
    /// `None` means born-on plus [`WEANING_AGE_DAYS`].
    pub weaning_on: Option<NaiveDate>,
    pub males: u32,
    pub females: u32,
}

/// Default weaning date for a birth date.
pub fn default_weaning_date(born_on: NaiveDate) -> NaiveDate {
    born_on + Duration::days(WEANING_AGE_DAYS)
}

impl Litter {
    /// Record a newborn litter.
    pub fn new(id: LitterId, breeding_pair_id: BreedingPairId, details: LitterDetails) -> Self {
        let weaning_on = details
            .weaning_on
            .unwrap_or_else(|| default_weaning_date(details.born_on));
        Self {
            id,
            breeding_pair_id,
            born_on: details.born_on,
            weaning_on,
            males: details.males,
            females: details.females,
            males_separated: false,
            females_separated: false,
        }
    }

    /// Reconstitute a litter from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: LitterId,
        breeding_pair_id: BreedingPairId,
        born_on: NaiveDate,
        weaning_on: NaiveDate,
        males: u32,
        females: u32,
        males_separated: bool,
        females_separated: bool,
    ) -> Self {
        Self {
            id,
            breeding_pair_id,
            born_on,
            weaning_on,
            males,
            females,
            males_separated,
            females_separated,
        }
    }

    pub fn id(&self) -> &LitterId {
        &self.id
    }

    pub fn breeding_pair_id(&self) -> &BreedingPairId {
        &self.breeding_pair_id
    }

    pub fn born_on(&self) -> NaiveDate {
        self.born_on
    }

    pub fn weaning_on(&self) -> NaiveDate {
        self.weaning_on
    }

    pub fn males(&self) -> u32 {
        self.males
    }

    pub fn females(&self) -> u32 {
        self.females
    }

    /// Pup count for one sex.
    pub fn head_count(&self, sex: Sex) -> u32 {
        match sex {
            Sex::Male => self.males,
            Sex::Female => self.females,
        }
    }

    pub fn is_separated(&self, sex: Sex) -> bool {
        match sex {
            Sex::Male => self.males_separated,
            Sex::Female => self.females_separated,
        }
    }

    /// Flag one sex as moved to its own cage.
    ///
    /// # Errors
    ///
    /// - `AlreadySeparated` if that sex was separated before
    pub fn mark_separated(&mut self, sex: Sex) -> Result<(), ColonyError> {
        if self.is_separated(sex) {
            return Err(ColonyError::AlreadySeparated {
                litter_id: self.id,
                sex,
            });
        }
        match sex {
            Sex::Male => self.males_separated = true,
            Sex::Female => self.females_separated = true,
        }
        Ok(())
    }

    /// Carry over separations already recorded on `stored`. Flags only ever
    /// go from false to true.
    pub fn keep_separations(&mut self, stored: &Litter) {
        self.males_separated |= stored.males_separated;
        self.females_separated |= stored.females_separated;
    }

    /// Overwrite dates and counts. A missing weaning date is recomputed.
    pub fn revise(&mut self, details: LitterDetails) {
        self.born_on = details.born_on;
        self.weaning_on = details
            .weaning_on
            .unwrap_or_else(|| default_weaning_date(details.born_on));
        self.males = details.males;
        self.females = details.females;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn born() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn litter() -> Litter {
        Litter::new(
            LitterId::new(),
            BreedingPairId::new(),
            LitterDetails {
                born_on: born(),
                weaning_on: None,
                males: 4,
                females: 3,
            },
        )
    }

    #[test]
    fn weaning_defaults_to_twenty_eight_days_after_birth() {
        assert_eq!(
            litter().weaning_on(),
            NaiveDate::from_ymd_opt(2024, 6, 7).unwrap()
        );
    }

    #[test]
    fn explicit_weaning_date_is_kept() {
        let weaning = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let litter = Litter::new(
            LitterId::new(),
            BreedingPairId::new(),
            LitterDetails {
                born_on: born(),
                weaning_on: Some(weaning),
                males: 0,
                females: 0,
            },
        );
        assert_eq!(litter.weaning_on(), weaning);
    }

    #[test]
    fn head_count_is_per_sex() {
        let litter = litter();
        assert_eq!(litter.head_count(Sex::Male), 4);
        assert_eq!(litter.head_count(Sex::Female), 3);
    }

    #[test]
    fn each_sex_separates_once() {
        let mut litter = litter();
        litter.mark_separated(Sex::Male).unwrap();
        assert!(litter.is_separated(Sex::Male));
        assert!(!litter.is_separated(Sex::Female));

        let err = litter.mark_separated(Sex::Male).unwrap_err();
        assert!(matches!(err, ColonyError::AlreadySeparated { sex: Sex::Male, .. }));

        litter.mark_separated(Sex::Female).unwrap();
        assert!(litter.is_separated(Sex::Female));
    }

    #[test]
    fn revise_recomputes_missing_weaning_date() {
        let mut litter = litter();
        let new_birth = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        litter.revise(LitterDetails {
            born_on: new_birth,
            weaning_on: None,
            males: 5,
            females: 5,
        });
        assert_eq!(litter.weaning_on(), default_weaning_date(new_birth));
        assert_eq!(litter.males(), 5);
    }
}
