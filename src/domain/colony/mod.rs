//! Colony domain module.
//!
//! Breeding pairs produce litters; at weaning each litter's males and females
//! are moved to cages of their own. Every pair and every weaned group occupies
//! exactly one cage, identified by a label whose prefix letter names the strain.
//!
//! # Cage allocation
//!
//! See [`allocator`] for the numbering policy. The allocator holds no state of
//! its own: a [`CageLedger`] is a snapshot of the labels held by live records.

pub mod allocator;
mod breeding_pair;
mod cage_label;
mod errors;
mod litter;
mod observation;
mod strain;
mod weaned_group;

pub use allocator::{
    label_has_prefix, label_matches_strain, labels_in_use, next_available_number,
    CageLabelRejected, CageLedger, HousingKind, Labeled, RejectionReason,
};
pub use breeding_pair::{BreedingPair, BreedingPairDetails};
pub use cage_label::CageLabel;
pub use errors::ColonyError;
pub use litter::{default_weaning_date, Litter, LitterDetails, WEANING_AGE_DAYS};
pub use observation::{Observation, MAX_NOTE_LENGTH};
pub use strain::{InvalidStrainError, Strain};
pub use weaned_group::{Sex, WeanedGroup};
