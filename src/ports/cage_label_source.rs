//! Cage label source port (read side).
//!
//! The allocator only ever needs the labels held by live records of each
//! housing kind. One query per kind keeps adapters trivial: a single indexed
//! column scan.

use async_trait::async_trait;

use crate::domain::colony::HousingKind;
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait CageLabelSource: Send + Sync {
    /// Labels currently held by live records of `kind`, in no particular order.
    async fn cage_labels(&self, kind: HousingKind) -> Result<Vec<String>, DomainError>;
}
