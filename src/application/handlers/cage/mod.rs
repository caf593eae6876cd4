//! Cage label allocation service.

mod cage_label_service;

pub use cage_label_service::{CageLabelService, MAX_ALLOCATION_ATTEMPTS};
