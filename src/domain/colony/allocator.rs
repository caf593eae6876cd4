//! Cage label allocation.
//!
//! Labels are never stored as counters. Every decision is recomputed from the
//! labels currently held by live records (breeding pairs, male groups and
//! female groups), so a label becomes free again as soon as its owner is
//! deleted.
//!
//! # Numbering policy
//!
//! The in-use numbers for a prefix are taken in ascending order and the first
//! hole between consecutive values is filled. Numbers below the smallest value
//! in use are never back-filled: `{5}` yields `6`, `{2, 3}` yields `4`. With no
//! hole the number after the maximum is used, and an empty prefix starts at `1`.
//! Numbers never exceed [`CageLabel::MAX_NUMBER`]; at that ceiling the lowest
//! free number from `1` is used.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{CageLabel, InvalidStrainError, Strain};

/// Anything that occupies a cage.
pub trait Labeled {
    /// The cage label as stored on the record.
    fn cage_label(&self) -> &str;
}

impl Labeled for String {
    fn cage_label(&self) -> &str {
        self
    }
}

impl Labeled for &str {
    fn cage_label(&self) -> &str {
        self
    }
}

/// The kinds of record that hold a cage label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HousingKind {
    BreedingPair,
    MaleGroup,
    FemaleGroup,
}

impl HousingKind {
    pub const ALL: [HousingKind; 3] = [
        HousingKind::BreedingPair,
        HousingKind::MaleGroup,
        HousingKind::FemaleGroup,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HousingKind::BreedingPair => "breeding_pair",
            HousingKind::MaleGroup => "male_group",
            HousingKind::FemaleGroup => "female_group",
        }
    }
}

/// Numeric suffix of `label` when its first character is `prefix`.
///
/// The suffix must be a non-empty run of ASCII digits. Anything else matches
/// nothing.
pub fn suffix_number(label: &str, prefix: char) -> Option<u64> {
    let rest = label.strip_prefix(prefix)?;
    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    rest.parse().ok()
}

/// Numbers in use under `prefix` across the given labels.
pub fn labels_in_use<'a, I>(labels: I, prefix: char) -> BTreeSet<u64>
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .filter_map(|label| suffix_number(label, prefix))
        .collect()
}

/// Next number to hand out for a prefix, given the numbers already in use.
///
/// The first gap above the smallest number in use, else one past the
/// largest. When that would exceed [`CageLabel::MAX_NUMBER`] the lowest free
/// number from 1 is used instead.
pub fn next_available_number(in_use: &BTreeSet<u64>) -> u64 {
    match first_gap_above_minimum(in_use) {
        Some(next) if next <= CageLabel::MAX_NUMBER => next,
        _ => lowest_free_number(in_use),
    }
}

/// `None` when the only candidate is past `u64::MAX`.
fn first_gap_above_minimum(in_use: &BTreeSet<u64>) -> Option<u64> {
    let mut numbers = in_use.iter().copied();
    let Some(mut previous) = numbers.next() else {
        return Some(1);
    };

    for current in numbers {
        let candidate = previous.checked_add(1)?;
        if candidate != current {
            return Some(candidate);
        }
        previous = current;
    }

    previous.checked_add(1)
}

fn lowest_free_number(in_use: &BTreeSet<u64>) -> u64 {
    let mut candidate = 1;
    for &n in in_use.range(1..) {
        if n != candidate {
            break;
        }
        candidate = candidate.saturating_add(1);
    }
    candidate
}

/// True iff `strain_name` is registered and `label` starts with its prefix.
///
/// Never fails: unknown strains simply do not match.
pub fn label_matches_strain(label: &str, strain_name: &str) -> bool {
    match Strain::resolve(strain_name) {
        Ok(strain) => label_has_prefix(label, strain),
        Err(_) => false,
    }
}

/// True iff the first character of `label` is the prefix of `strain`.
pub fn label_has_prefix(label: &str, strain: Strain) -> bool {
    label.chars().next() == Some(strain.prefix())
}

/// Why a proposed cage label was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The label does not start with the strain's prefix letter.
    WrongPrefix,
    /// Another live record already holds the label.
    InUse,
}

/// A proposed cage label failed the creation gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cage label '{label}' does not belong to strain {strain} or is already in use")]
pub struct CageLabelRejected {
    pub label: String,
    pub strain: Strain,
    pub reasons: Vec<RejectionReason>,
}

impl CageLabelRejected {
    pub fn has_reason(&self, reason: RejectionReason) -> bool {
        self.reasons.contains(&reason)
    }
}

/// Snapshot of every cage label held by live records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CageLedger {
    labels: Vec<String>,
}

impl CageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from raw label strings.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds the labels of any kind of housed record.
    pub fn extend_from<L: Labeled>(&mut self, records: &[L]) {
        self.labels
            .extend(records.iter().map(|r| r.cage_label().to_string()));
    }

    /// Same ledger minus one exact label; used when a record is relabelled so
    /// its own current label does not count against it.
    pub fn without(&self, label: &str) -> Self {
        Self {
            labels: self
                .labels
                .iter()
                .filter(|l| l.as_str() != label)
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels_in_use(&self, prefix: char) -> BTreeSet<u64> {
        labels_in_use(self.labels.iter().map(String::as_str), prefix)
    }

    pub fn next_available_number(&self, prefix: char) -> u64 {
        next_available_number(&self.labels_in_use(prefix))
    }

    pub fn next_available_label(&self, strain: Strain) -> CageLabel {
        CageLabel::new(strain, self.next_available_number(strain.prefix()))
    }

    /// Resolves the strain first; an unknown name fails before any scan.
    pub fn next_available_label_for(
        &self,
        strain_name: &str,
    ) -> Result<CageLabel, InvalidStrainError> {
        let strain = Strain::resolve(strain_name)?;
        Ok(self.next_available_label(strain))
    }

    /// Exact, case-sensitive match against every live label.
    pub fn is_label_in_use(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Creation gate: the label must carry the strain prefix and be free.
    pub fn check_new_label(&self, label: &str, strain: Strain) -> Result<(), CageLabelRejected> {
        let mut reasons = Vec::new();
        if !label_has_prefix(label, strain) {
            reasons.push(RejectionReason::WrongPrefix);
        }
        if self.is_label_in_use(label) {
            reasons.push(RejectionReason::InUse);
        }

        if reasons.is_empty() {
            Ok(())
        } else {
            Err(CageLabelRejected {
                label: label.to_string(),
                strain,
                reasons,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(values: &[u64]) -> BTreeSet<u64> {
        values.iter().copied().collect()
    }

    #[test]
    fn empty_prefix_starts_at_one() {
        assert_eq!(next_available_number(&set(&[])), 1);
    }

    #[test]
    fn single_value_never_backfills_below() {
        assert_eq!(next_available_number(&set(&[5])), 6);
        assert_eq!(next_available_number(&set(&[1])), 2);
    }

    #[test]
    fn contiguous_run_appends_after_maximum() {
        assert_eq!(next_available_number(&set(&[1, 2, 3])), 4);
    }

    #[test]
    fn first_hole_is_filled() {
        assert_eq!(next_available_number(&set(&[1, 3, 4])), 2);
        assert_eq!(next_available_number(&set(&[2, 3, 5, 6])), 4);
        assert_eq!(next_available_number(&set(&[1, 2, 4, 7])), 3);
    }

    #[test]
    fn gap_below_smallest_is_ignored_with_many_values() {
        assert_eq!(next_available_number(&set(&[2, 3])), 4);
    }

    #[test]
    fn labels_in_use_filters_by_prefix_and_collapses_duplicates() {
        let labels = ["A1", "A3", "B2", "A3", "C1", "A10"];
        assert_eq!(labels_in_use(labels, 'A'), set(&[1, 3, 10]));
        assert_eq!(labels_in_use(labels, 'B'), set(&[2]));
        assert!(labels_in_use(labels, 'D').is_empty());
    }

    #[test]
    fn labels_in_use_skips_malformed_suffixes() {
        let labels = ["A", "Ax", "A-2", "a4", "A 5", "A7"];
        assert_eq!(labels_in_use(labels, 'A'), set(&[7]));
    }

    #[test]
    fn label_matches_strain_checks_first_character() {
        assert!(label_matches_strain("A7", "C57B6/J"));
        assert!(!label_matches_strain("A7", "CD45.1"));
        assert!(!label_matches_strain("A7", "unknown"));
        assert!(!label_matches_strain("", "C57B6/J"));
    }

    #[test]
    fn is_label_in_use_is_exact_and_case_sensitive() {
        let ledger = CageLedger::from_labels(["A7", "B2"]);
        assert!(ledger.is_label_in_use("A7"));
        assert!(!ledger.is_label_in_use("a7"));
        assert!(!ledger.is_label_in_use("A07"));
        assert!(!ledger.is_label_in_use("garbage"));
    }

    #[test]
    fn next_available_label_uses_strain_prefix() {
        let ledger = CageLedger::from_labels(["A1", "A2", "B1", "A4"]);
        assert_eq!(ledger.next_available_label(Strain::C57B6J).to_string(), "A3");
        assert_eq!(ledger.next_available_label(Strain::Cd45_1).to_string(), "B2");
        assert_eq!(ledger.next_available_label(Strain::Rag1Het).to_string(), "C1");
    }

    #[test]
    fn next_available_label_for_unknown_strain_fails() {
        let ledger = CageLedger::new();
        let err = ledger.next_available_label_for("129S").unwrap_err();
        assert_eq!(err.name, "129S");
    }

    #[test]
    fn extend_from_collects_every_record_kind() {
        let pairs = vec!["A1".to_string()];
        let males = vec!["A2".to_string()];
        let females = vec!["A4".to_string()];

        let mut ledger = CageLedger::new();
        ledger.extend_from(&pairs);
        ledger.extend_from(&males);
        ledger.extend_from(&females);

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.next_available_number('A'), 3);
    }

    #[test]
    fn check_new_label_accepts_free_matching_label() {
        let ledger = CageLedger::from_labels(["A1"]);
        assert!(ledger.check_new_label("A2", Strain::C57B6J).is_ok());
    }

    #[test]
    fn check_new_label_reports_every_failed_condition() {
        let ledger = CageLedger::from_labels(["B1"]);

        let taken = ledger.check_new_label("B1", Strain::Cd45_1).unwrap_err();
        assert_eq!(taken.reasons, vec![RejectionReason::InUse]);

        let foreign = ledger.check_new_label("A9", Strain::Cd45_1).unwrap_err();
        assert_eq!(foreign.reasons, vec![RejectionReason::WrongPrefix]);

        let both = ledger.check_new_label("B1", Strain::C57B6J).unwrap_err();
        assert!(both.has_reason(RejectionReason::WrongPrefix));
        assert!(both.has_reason(RejectionReason::InUse));
    }

    #[test]
    fn rejection_message_is_a_single_combined_sentence() {
        let ledger = CageLedger::from_labels(["A1"]);
        let err = ledger.check_new_label("A1", Strain::C57B6J).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cage label 'A1' does not belong to strain C57B6/J or is already in use"
        );
    }

    #[test]
    fn without_excludes_one_label() {
        let ledger = CageLedger::from_labels(["A1", "A2"]);
        let relabel = ledger.without("A2");
        assert!(!relabel.is_label_in_use("A2"));
        assert!(relabel.is_label_in_use("A1"));
    }

    #[test]
    fn top_of_range_wraps_to_lowest_free_number() {
        assert_eq!(next_available_number(&BTreeSet::from([u64::MAX])), 1);
        assert_eq!(next_available_number(&BTreeSet::from([u64::MAX - 1, u64::MAX])), 1);
        assert_eq!(next_available_number(&BTreeSet::from([CageLabel::MAX_NUMBER])), 1);
        assert_eq!(
            next_available_number(&BTreeSet::from([1, 2, CageLabel::MAX_NUMBER])),
            3
        );
        assert_eq!(
            next_available_number(&BTreeSet::from([CageLabel::MAX_NUMBER - 1])),
            CageLabel::MAX_NUMBER
        );
    }

    #[test]
    fn oversized_stored_label_does_not_block_allocation() {
        let ledger = CageLedger::from_labels(["A18446744073709551615", "A1"]);
        let next = ledger.next_available_label(Strain::C57B6J);
        assert_eq!(next.to_string(), "A2");
        assert!(ledger.check_new_label("A2", Strain::C57B6J).is_ok());
    }

    proptest! {
        #[test]
        fn next_number_stays_in_range_and_free(values in prop::collection::btree_set(any::<u64>(), 0..32)) {
            let next = next_available_number(&values);
            prop_assert!(!values.contains(&next));
            prop_assert!((1..=CageLabel::MAX_NUMBER).contains(&next));
        }

        #[test]
        fn next_number_is_never_in_use(values in prop::collection::btree_set(1u64..5_000, 0..64)) {
            let next = next_available_number(&values);
            prop_assert!(!values.contains(&next));
            prop_assert!(next >= 1);
        }

        #[test]
        fn next_number_is_at_most_one_past_maximum(values in prop::collection::btree_set(1u64..5_000, 1..64)) {
            let next = next_available_number(&values);
            let max = *values.iter().next_back().unwrap();
            prop_assert!(next <= max + 1);
            prop_assert!(next > *values.iter().next().unwrap());
        }

        #[test]
        fn next_number_fills_first_hole_above_minimum(values in prop::collection::btree_set(1u64..500, 2..40)) {
            let next = next_available_number(&values);
            let min = *values.iter().next().unwrap();
            // Everything between the minimum and the answer is occupied.
            for n in min..next {
                prop_assert!(values.contains(&n));
            }
        }

        #[test]
        fn allocation_is_idempotent(labels in prop::collection::vec("[ABC][1-9][0-9]{0,2}", 0..40)) {
            let ledger = CageLedger::from_labels(labels);
            for strain in Strain::ALL {
                let first = ledger.next_available_label(strain);
                let second = ledger.next_available_label(strain);
                prop_assert_eq!(first, second);
                prop_assert!(!ledger.is_label_in_use(&first.to_string()));
                prop_assert!(ledger.check_new_label(&first.to_string(), strain).is_ok());
            }
        }
    }
}
