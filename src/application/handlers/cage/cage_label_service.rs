//! CageLabelService - allocation and validation of cage labels against live
//! records.
//!
//! Each call takes a fresh snapshot through the [`CageLabelSource`] port and
//! delegates to the pure [`CageLedger`]. Nothing is reserved between calls:
//! two requests may be handed the same label, and the store's uniqueness
//! check at commit decides. [`CageLabelService::with_cage_label`] wraps that
//! commit and re-allocates on conflict.

use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;

use crate::domain::colony::{
    label_matches_strain, CageLabel, CageLedger, ColonyError, HousingKind, Strain,
};
use crate::domain::foundation::DomainError;
use crate::ports::CageLabelSource;

/// Allocate-and-persist attempts before a conflict is reported to the caller.
pub const MAX_ALLOCATION_ATTEMPTS: u32 = 3;

pub struct CageLabelService {
    source: Arc<dyn CageLabelSource>,
}

impl CageLabelService {
    pub fn new(source: Arc<dyn CageLabelSource>) -> Self {
        Self { source }
    }

    /// Snapshot of every label held by live pairs, male groups and female
    /// groups.
    pub async fn ledger(&self) -> Result<CageLedger, DomainError> {
        let mut ledger = CageLedger::new();
        for kind in HousingKind::ALL {
            let labels = self.source.cage_labels(kind).await?;
            ledger.extend_from(&labels);
        }
        Ok(ledger)
    }

    /// Numbers in use under `prefix`.
    pub async fn labels_in_use(&self, prefix: char) -> Result<BTreeSet<u64>, DomainError> {
        Ok(self.ledger().await?.labels_in_use(prefix))
    }

    pub async fn next_available_number(&self, prefix: char) -> Result<u64, DomainError> {
        Ok(self.ledger().await?.next_available_number(prefix))
    }

    /// Next free label for a strain given by registry name.
    ///
    /// # Errors
    ///
    /// - `InvalidStrain` for a name outside the registry; no query is made
    pub async fn next_available_label(&self, strain_name: &str) -> Result<CageLabel, ColonyError> {
        let strain = Strain::resolve(strain_name)?;
        Ok(self.next_label_for(strain).await?)
    }

    /// Next free label for an already resolved strain.
    pub async fn next_label_for(&self, strain: Strain) -> Result<CageLabel, DomainError> {
        let label = self.ledger().await?.next_available_label(strain);
        tracing::debug!(strain = %strain, label = %label, "Allocated cage label");
        Ok(label)
    }

    /// Exact match against every live label. No case folding.
    pub async fn is_label_in_use(&self, label: &str) -> Result<bool, DomainError> {
        Ok(self.ledger().await?.is_label_in_use(label))
    }

    /// Pure prefix check; never fails.
    pub fn label_matches_strain(&self, label: &str, strain_name: &str) -> bool {
        label_matches_strain(label, strain_name)
    }

    /// Gate for a caller-chosen label on a new record.
    ///
    /// # Errors
    ///
    /// - `Validation` if the label is not well-formed
    /// - `CageLabelRejected` if it lacks the strain prefix or is in use
    pub async fn validate_new_label(
        &self,
        label: &str,
        strain: Strain,
    ) -> Result<CageLabel, ColonyError> {
        let parsed = CageLabel::parse(label)?;
        self.ledger().await?.check_new_label(label, strain)?;
        Ok(parsed)
    }

    /// Gate for moving an existing record from `current` to `label`. The
    /// record's own label does not count as in use.
    pub async fn validate_relabel(
        &self,
        current: &str,
        label: &str,
        strain: Strain,
    ) -> Result<CageLabel, ColonyError> {
        let parsed = CageLabel::parse(label)?;
        self.ledger()
            .await?
            .without(current)
            .check_new_label(label, strain)?;
        Ok(parsed)
    }

    /// Runs `persist` with a cage label for a new record of `strain`.
    ///
    /// A requested label goes through [`validate_new_label`] once and a commit
    /// conflict is final. Without one, a label is allocated and allocation is
    /// retried on conflict up to [`MAX_ALLOCATION_ATTEMPTS`] times.
    ///
    /// [`validate_new_label`]: Self::validate_new_label
    pub async fn with_cage_label<T, F, Fut>(
        &self,
        requested: Option<&str>,
        strain: Strain,
        mut persist: F,
    ) -> Result<T, ColonyError>
    where
        F: FnMut(CageLabel) -> Fut,
        Fut: Future<Output = Result<T, ColonyError>>,
    {
        if let Some(raw) = requested {
            let label = self.validate_new_label(raw, strain).await?;
            return persist(label).await;
        }

        let mut attempt = 1;
        loop {
            let label = self.next_label_for(strain).await?;
            match persist(label).await {
                Err(e) if e.is_label_conflict() && attempt < MAX_ALLOCATION_ATTEMPTS => {
                    tracing::warn!(
                        label = %label,
                        attempt,
                        "Cage label taken before commit, allocating again"
                    );
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::colony::RejectionReason;
    use crate::domain::foundation::ErrorCode;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Fixed labels per kind; counts queries.
    struct FixedSource {
        labels: HashMap<HousingKind, Vec<String>>,
        queries: AtomicUsize,
    }

    impl FixedSource {
        fn new(pairs: &[&str], males: &[&str], females: &[&str]) -> Self {
            let own = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
            let mut labels = HashMap::new();
            labels.insert(HousingKind::BreedingPair, own(pairs));
            labels.insert(HousingKind::MaleGroup, own(males));
            labels.insert(HousingKind::FemaleGroup, own(females));
            Self {
                labels,
                queries: AtomicUsize::new(0),
            }
        }

        fn queries(&self) -> usize {
            self.queries.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CageLabelSource for FixedSource {
        async fn cage_labels(&self, kind: HousingKind) -> Result<Vec<String>, DomainError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            Ok(self.labels.get(&kind).cloned().unwrap_or_default())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CageLabelSource for FailingSource {
        async fn cage_labels(&self, _kind: HousingKind) -> Result<Vec<String>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection refused"))
        }
    }

    fn service(source: FixedSource) -> (CageLabelService, Arc<FixedSource>) {
        let source = Arc::new(source);
        (CageLabelService::new(source.clone()), source)
    }

    #[tokio::test]
    async fn labels_are_collected_from_every_housing_kind() {
        let (svc, source) = service(FixedSource::new(&["A1"], &["A2", "B1"], &["A5"]));
        let in_use = svc.labels_in_use('A').await.unwrap();
        assert_eq!(in_use.into_iter().collect::<Vec<_>>(), vec![1, 2, 5]);
        assert_eq!(source.queries(), 3);
    }

    #[tokio::test]
    async fn next_available_label_fills_first_gap_across_kinds() {
        let (svc, _) = service(FixedSource::new(&["A1"], &["A2"], &["A4"]));
        let label = svc.next_available_label("C57B6/J").await.unwrap();
        assert_eq!(label.to_string(), "A3");
    }

    #[tokio::test]
    async fn next_available_label_is_idempotent_without_writes() {
        let (svc, _) = service(FixedSource::new(&["B1", "B2"], &[], &[]));
        let first = svc.next_available_label("CD45.1").await.unwrap();
        let second = svc.next_available_label("CD45.1").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), "B3");
    }

    #[tokio::test]
    async fn unknown_strain_fails_without_touching_queries() {
        let (svc, source) = service(FixedSource::new(&["A1"], &[], &[]));
        let err = svc.next_available_label("NOD/SCID").await.unwrap_err();
        assert!(matches!(err, ColonyError::InvalidStrain(ref e) if e.name == "NOD/SCID"));
        assert_eq!(source.queries(), 0);
    }

    #[tokio::test]
    async fn is_label_in_use_is_exact() {
        let (svc, _) = service(FixedSource::new(&["A7"], &[], &[]));
        assert!(svc.is_label_in_use("A7").await.unwrap());
        assert!(!svc.is_label_in_use("a7").await.unwrap());
        assert!(!svc.is_label_in_use("A70").await.unwrap());
    }

    #[tokio::test]
    async fn validate_new_label_applies_both_conditions() {
        let (svc, _) = service(FixedSource::new(&["A1"], &[], &[]));

        assert_eq!(
            svc.validate_new_label("A2", Strain::C57B6J).await.unwrap().to_string(),
            "A2"
        );

        match svc.validate_new_label("A1", Strain::C57B6J).await {
            Err(ColonyError::CageLabelRejected(r)) => {
                assert_eq!(r.reasons, vec![RejectionReason::InUse])
            }
            other => panic!("unexpected: {other:?}"),
        }

        match svc.validate_new_label("B1", Strain::C57B6J).await {
            Err(ColonyError::CageLabelRejected(r)) => {
                assert_eq!(r.reasons, vec![RejectionReason::WrongPrefix])
            }
            other => panic!("unexpected: {other:?}"),
        }

        assert!(matches!(
            svc.validate_new_label("A", Strain::C57B6J).await,
            Err(ColonyError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn validate_relabel_ignores_own_label() {
        let (svc, _) = service(FixedSource::new(&["A1", "A2"], &[], &[]));
        assert!(svc.validate_relabel("A1", "A1", Strain::C57B6J).await.is_ok());
        assert!(svc.validate_relabel("A1", "A2", Strain::C57B6J).await.is_err());
    }

    #[tokio::test]
    async fn overlong_requested_label_is_a_validation_error() {
        let (svc, _) = service(FixedSource::new(&["A1"], &[], &[]));
        let err = svc
            .validate_new_label("A18446744073709551615", Strain::C57B6J)
            .await
            .unwrap_err();
        assert!(matches!(err, ColonyError::Validation(_)));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn allocation_past_the_largest_number_reuses_a_free_one() {
        let (svc, _) = service(FixedSource::new(&["A999999999"], &[], &[]));
        let label = svc.next_available_label("C57B6/J").await.unwrap();
        assert_eq!(label.to_string(), "A1");

        let stored = ["A18446744073709551614", "A18446744073709551615"];
        let (svc, _) = service(FixedSource::new(&stored, &[], &[]));
        let label = svc.next_available_label("C57B6/J").await.unwrap();
        assert_eq!(label.to_string(), "A1");
        assert!(!svc.is_label_in_use("A1").await.unwrap());
    }

    #[tokio::test]
    async fn source_failures_propagate_unchanged() {
        let svc = CageLabelService::new(Arc::new(FailingSource));
        let err = svc.is_label_in_use("A1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(svc.label_matches_strain("A1", "C57B6/J"));
    }

    #[tokio::test]
    async fn with_cage_label_retries_allocation_on_conflict() {
        let (svc, _) = service(FixedSource::new(&[], &[], &[]));
        let attempts = Mutex::new(Vec::new());

        let result = svc
            .with_cage_label(None, Strain::Rag1Het, |label| {
                attempts.lock().unwrap().push(label);
                let n = attempts.lock().unwrap().len();
                async move {
                    if n < 2 {
                        Err(ColonyError::CageLabelConflict(label.to_string()))
                    } else {
                        Ok(label)
                    }
                }
            })
            .await
            .unwrap();

        assert_eq!(result.to_string(), "C1");
        assert_eq!(attempts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn with_cage_label_gives_up_after_max_attempts() {
        let (svc, _) = service(FixedSource::new(&[], &[], &[]));
        let calls = AtomicUsize::new(0);

        let err = svc
            .with_cage_label(None, Strain::C57B6J, |label| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err::<(), _>(ColonyError::CageLabelConflict(label.to_string())) }
            })
            .await
            .unwrap_err();

        assert!(err.is_label_conflict());
        assert_eq!(calls.load(Ordering::SeqCst), MAX_ALLOCATION_ATTEMPTS as usize);
    }

    #[tokio::test]
    async fn with_cage_label_does_not_retry_requested_labels() {
        let (svc, _) = service(FixedSource::new(&[], &[], &[]));
        let calls = AtomicUsize::new(0);

        let err = svc
            .with_cage_label(Some("A9"), Strain::C57B6J, |label| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Err::<(), _>(ColonyError::CageLabelConflict(label.to_string())) }
            })
            .await
            .unwrap_err();

        assert!(err.is_label_conflict());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
