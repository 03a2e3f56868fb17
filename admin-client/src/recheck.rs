//! Batch price recheck
//!
//! Runs the mismatch detector over every saved combo and persists warning
//! changes. Runs only when the operator asks for it.

use crate::ClientResult;
use crate::api::{CatalogSource, ComboStore};
use combo_pricing::{Catalog, MismatchDetector};
use serde::Serialize;
use shared::util::now_millis;

/// A combo the batch could not process
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecheckFailure {
    pub combo_id: String,
    pub error: String,
}

/// Summary of one recheck run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecheckReport {
    /// Combos examined
    pub checked: usize,
    /// Combos whose warning was newly set or updated
    pub flagged: usize,
    /// Combos whose warning was removed
    pub cleared: usize,
    /// Combos whose stored warning state already matched
    pub unchanged: usize,
    pub failures: Vec<RecheckFailure>,
}

impl RecheckReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct PriceRecheckService<S> {
    store: S,
    detector: MismatchDetector,
}

impl<S> PriceRecheckService<S>
where
    S: CatalogSource + ComboStore,
{
    pub fn new(store: S, detector: MismatchDetector) -> Self {
        Self { store, detector }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Recheck every combo against the current menu
    ///
    /// Loading the catalog or the combo list is fatal. Per-combo failures are
    /// recorded in the report and the batch carries on.
    pub async fn run(&self) -> ClientResult<RecheckReport> {
        let catalog = Catalog::new(self.store.list_menu_items().await?);
        let combos = self.store.list_combos().await?;
        let checked_at = now_millis();

        tracing::info!(
            combos = combos.len(),
            menu_items = catalog.len(),
            tolerance = %self.detector.policy().tolerance,
            "Starting price recheck"
        );

        let mut report = RecheckReport::default();
        for combo in &combos {
            report.checked += 1;

            let outcome = match self.detector.check(combo, &catalog, checked_at) {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!(combo_id = %combo.id, error = %e, "Cannot recheck combo");
                    report.failures.push(RecheckFailure {
                        combo_id: combo.id.clone(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };

            if !outcome.changes(combo) {
                report.unchanged += 1;
                continue;
            }

            match self
                .store
                .save_price_warning(&combo.id, outcome.warning.as_ref())
                .await
            {
                Ok(()) if outcome.is_flagged() => report.flagged += 1,
                Ok(()) => {
                    tracing::info!(combo_id = %combo.id, "Price warning cleared");
                    report.cleared += 1;
                }
                Err(e) => {
                    tracing::error!(combo_id = %combo.id, error = %e, "Failed to save price warning");
                    report.failures.push(RecheckFailure {
                        combo_id: combo.id.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            checked = report.checked,
            flagged = report.flagged,
            cleared = report.cleared,
            unchanged = report.unchanged,
            failed = report.failures.len(),
            "Price recheck finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryBackend;
    use combo_pricing::MismatchPolicy;
    use rust_decimal::Decimal;
    use shared::models::{ComboItem, ComboOffer, Discount, MenuItem, PriceWarning};

    fn d(value: i64) -> Decimal {
        Decimal::from(value)
    }

    fn combo(id: &str, original: i64, items: Vec<ComboItem>) -> ComboOffer {
        ComboOffer {
            id: id.into(),
            name: format!("Combo {}", id),
            description: String::new(),
            items,
            discount: Discount::None,
            original_price: d(original),
            price: d(original),
            valid_from: None,
            valid_until: None,
            is_active: true,
            price_warning: None,
        }
    }

    fn stale_warning(snapshot: i64, current: i64) -> PriceWarning {
        PriceWarning {
            has_warning: true,
            current_original_price: d(current),
            snapshot_original_price: d(snapshot),
            delta: d(current - snapshot),
            missing_items: vec![],
            checked_at: Some(1),
        }
    }

    fn menu() -> Vec<MenuItem> {
        vec![
            MenuItem::new("m1", "Burger", d(225)),
            MenuItem::new("m2", "Fries", d(100)),
        ]
    }

    #[tokio::test]
    async fn test_flags_drifted_combo() {
        let backend = InMemoryBackend::new(
            menu(),
            vec![combo("c1", 500, vec![ComboItem::new("m1", 2), ComboItem::new("m2", 1)])],
        );
        let service = PriceRecheckService::new(backend, MismatchDetector::default());

        let report = service.run().await.unwrap();
        assert_eq!(report.checked, 1);
        assert_eq!(report.flagged, 1);
        assert!(report.is_clean());

        let stored = service.store().combos()[0].clone();
        let warning = stored.price_warning.unwrap();
        assert_eq!(warning.current_original_price, d(550));
        assert_eq!(warning.snapshot_original_price, d(500));
        assert_eq!(warning.delta, d(50));
        assert!(warning.checked_at.is_some());
        // Snapshot prices are never rewritten
        assert_eq!(stored.original_price, d(500));
        assert_eq!(stored.price, d(500));
    }

    #[tokio::test]
    async fn test_only_changes_are_persisted() {
        let mut same = combo("c1", 500, vec![ComboItem::new("m1", 2), ComboItem::new("m2", 1)]);
        same.price_warning = Some(stale_warning(500, 550));
        let mut fixed = combo("c2", 325, vec![ComboItem::new("m1", 1), ComboItem::new("m2", 1)]);
        fixed.price_warning = Some(stale_warning(325, 300));
        let fine = combo("c3", 100, vec![ComboItem::new("m2", 1)]);

        let backend = InMemoryBackend::new(menu(), vec![same, fixed, fine]);
        let service = PriceRecheckService::new(backend, MismatchDetector::default());

        let report = service.run().await.unwrap();
        assert_eq!(report.checked, 3);
        assert_eq!(report.flagged, 0);
        assert_eq!(report.cleared, 1);
        assert_eq!(report.unchanged, 2);

        let saves = service.store().saves();
        assert_eq!(saves, vec![("c2".to_string(), None)]);
    }

    #[tokio::test]
    async fn test_second_run_is_noop() {
        let backend = InMemoryBackend::new(
            menu(),
            vec![combo("c1", 500, vec![ComboItem::new("m1", 2), ComboItem::new("m2", 1)])],
        );
        let service = PriceRecheckService::new(backend, MismatchDetector::default());

        service.run().await.unwrap();
        let second = service.run().await.unwrap();
        assert_eq!(second.flagged, 0);
        assert_eq!(second.unchanged, 1);
        assert_eq!(service.store().saves().len(), 1);
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_batch() {
        let backend = InMemoryBackend::new(
            menu(),
            vec![
                combo("c1", 400, vec![ComboItem::new("m1", 2)]),
                combo("c2", 0, vec![ComboItem::new("m2", 0)]),
                combo("c3", 90, vec![ComboItem::new("m2", 1)]),
            ],
        )
        .fail_saves_for("c1");
        let service = PriceRecheckService::new(backend, MismatchDetector::default());

        let report = service.run().await.unwrap();
        assert_eq!(report.checked, 3);
        assert_eq!(report.flagged, 1);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].combo_id, "c1");
        assert_eq!(report.failures[1].combo_id, "c2");
        assert!(!report.is_clean());
        assert!(service.store().combos()[2].has_price_warning());
    }

    #[tokio::test]
    async fn test_missing_item_and_tolerance() {
        let backend = InMemoryBackend::new(
            menu(),
            vec![
                combo("c1", 325, vec![ComboItem::new("m1", 1), ComboItem::new("m9", 1)]),
                combo("c2", 98, vec![ComboItem::new("m2", 1)]),
            ],
        );
        let detector = MismatchDetector::new(MismatchPolicy::with_tolerance(d(5)));
        let service = PriceRecheckService::new(backend, detector);

        let report = service.run().await.unwrap();
        assert_eq!(report.flagged, 1);
        assert_eq!(report.unchanged, 1);

        let combos = service.store().combos();
        let warning = combos[0].price_warning.as_ref().unwrap();
        assert_eq!(warning.missing_items, vec!["m9".to_string()]);
        assert_eq!(warning.current_original_price, d(225));
        assert!(combos[1].price_warning.is_none());
    }
}
