//! Original-Price Aggregator
//!
//! Sums `price × quantity` over a combo's items. Quantities and prices are
//! validated up front; nothing is rounded here.

use crate::catalog::Catalog;
use crate::error::PricingError;
use crate::money::{MAX_AMOUNT, check_quantity};
use crate::selection::SelectedItem;
use rust_decimal::Decimal;
use shared::models::ComboItem;

fn check_line(item_id: &str, price: Decimal, quantity: i32) -> Result<(), PricingError> {
    check_quantity(item_id, quantity)?;
    if price < Decimal::ZERO || price > MAX_AMOUNT {
        return Err(PricingError::InvalidPrice {
            item_id: item_id.to_string(),
            price,
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}

/// Sum of `item.price × quantity` over the selection
///
/// Returns exactly zero for an empty list.
pub fn aggregate(items: &[SelectedItem]) -> Result<Decimal, PricingError> {
    let mut total = Decimal::ZERO;
    for selected in items {
        check_line(&selected.item.id, selected.item.price, selected.quantity)?;
        total += selected.line_total();
    }
    Ok(total)
}

/// Original price of persisted combo lines at current catalog prices
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTotal {
    /// Sum over the lines whose menu item still exists
    pub total: Decimal,
    /// Menu item ids not found in the catalog
    pub missing: Vec<String>,
}

impl CatalogTotal {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Aggregate persisted combo lines against the live catalog
///
/// Lines referencing unknown menu items are skipped and reported in
/// [`CatalogTotal::missing`].
pub fn aggregate_catalog(items: &[ComboItem], catalog: &Catalog) -> Result<CatalogTotal, PricingError> {
    let mut total = Decimal::ZERO;
    let mut missing = Vec::new();

    for line in items {
        let Some(price) = catalog.price_of(&line.menu_item) else {
            if !missing.contains(&line.menu_item) {
                missing.push(line.menu_item.clone());
            }
            continue;
        };
        check_line(&line.menu_item, price, line.quantity)?;
        total += price * Decimal::from(line.quantity);
    }

    Ok(CatalogTotal { total, missing })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MenuItem;

    fn selected(id: &str, price: Decimal, quantity: i32) -> SelectedItem {
        SelectedItem::new(MenuItem::new(id, id, price), quantity)
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(aggregate(&[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_basic_sum() {
        let items = vec![
            selected("a", Decimal::from(100), 2),
            selected("b", Decimal::from(50), 1),
        ];
        assert_eq!(aggregate(&items).unwrap(), Decimal::from(250));
    }

    #[test]
    fn test_permutation_invariant() {
        let items = vec![
            selected("a", Decimal::new(1999, 2), 3),
            selected("b", Decimal::new(505, 2), 7),
            selected("c", Decimal::new(1, 2), 11),
        ];
        let expected = aggregate(&items).unwrap();

        let mut reversed = items.clone();
        reversed.reverse();
        assert_eq!(aggregate(&reversed).unwrap(), expected);

        let rotated = vec![items[1].clone(), items[2].clone(), items[0].clone()];
        assert_eq!(aggregate(&rotated).unwrap(), expected);
        // 59.97 + 35.35 + 0.11
        assert_eq!(expected, Decimal::new(9543, 2));
    }

    #[test]
    fn test_no_mid_computation_rounding() {
        let items: Vec<SelectedItem> = (0..10)
            .map(|i| selected(&format!("m{}", i), Decimal::new(3335, 3), 1))
            .collect();
        // 10 × 3.335 = 33.35; rounding each line first would give 33.40
        assert_eq!(aggregate(&items).unwrap(), Decimal::new(3335, 2));
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let items = vec![selected("a", Decimal::from(10), 0)];
        assert!(matches!(
            aggregate(&items),
            Err(PricingError::InvalidQuantity { quantity: 0, .. })
        ));

        let items = vec![selected("a", Decimal::from(10), -1)];
        assert!(aggregate(&items).is_err());
    }

    #[test]
    fn test_rejects_negative_price() {
        let items = vec![selected("a", Decimal::from(-5), 1)];
        assert!(matches!(
            aggregate(&items),
            Err(PricingError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_catalog_aggregate_reports_missing() {
        let catalog = Catalog::new(vec![
            MenuItem::new("m1", "Burger", Decimal::from(120)),
            MenuItem::new("m2", "Fries", Decimal::from(60)),
        ]);
        let lines = vec![
            ComboItem::new("m1", 2),
            ComboItem::new("m2", 1),
            ComboItem::new("gone", 1),
            ComboItem::new("gone", 2),
        ];

        let result = aggregate_catalog(&lines, &catalog).unwrap();
        assert_eq!(result.total, Decimal::from(300));
        assert_eq!(result.missing, vec!["gone".to_string()]);
        assert!(!result.is_complete());
    }

    #[test]
    fn test_catalog_aggregate_rejects_bad_quantity() {
        let catalog = Catalog::new(vec![MenuItem::new("m1", "Burger", Decimal::from(120))]);
        let lines = vec![ComboItem::new("m1", 0)];
        assert!(aggregate_catalog(&lines, &catalog).is_err());
    }
}
