//! Combo editing service
//!
//! Prices sent to the backend are always computed here, at submit time, from
//! the catalog's current menu prices.

use crate::api::{CatalogSource, ComboStore};
use crate::{ClientError, ClientResult};
use combo_pricing::{Catalog, ComboDraft, PriceBreakdown, PricingError, Selection};
use shared::models::{ComboItem, ComboOffer, Discount};

pub struct ComboService<S> {
    store: S,
}

impl<S> ComboService<S>
where
    S: CatalogSource + ComboStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn load_catalog(&self) -> ClientResult<Catalog> {
        let items = self.store.list_menu_items().await?;
        tracing::debug!(count = items.len(), "Loaded menu catalog");
        Ok(Catalog::new(items))
    }

    /// Open a saved combo in the editor with live menu prices
    pub async fn edit_draft(&self, id: &str) -> ClientResult<ComboDraft> {
        let combo = self.store.get_combo(id).await?;
        let catalog = self.load_catalog().await?;
        Ok(ComboDraft::from_combo(&combo, &catalog)?)
    }

    /// Price a list of `menu item × quantity` lines against the live catalog
    pub async fn preview(&self, lines: &[ComboItem], discount: &Discount) -> ClientResult<PriceBreakdown> {
        let catalog = self.load_catalog().await?;
        let mut draft = ComboDraft::default().with_discount(*discount);
        draft.selection = selection_from_lines(lines, &catalog)?;
        Ok(draft.preview()?)
    }

    pub async fn create(&self, draft: &ComboDraft) -> ClientResult<ComboOffer> {
        let draft = self.reprice(draft).await?;
        let submission = draft.to_submission()?;
        let created = self.store.create_combo(&submission).await?;
        tracing::info!(
            combo_id = %created.id,
            original_price = %submission.original_price,
            price = %submission.price,
            "Combo created"
        );
        Ok(created)
    }

    /// Save edits to a combo
    ///
    /// Saving re-snapshots prices; the same write clears any outstanding price
    /// warning.
    pub async fn update(&self, id: &str, draft: &ComboDraft) -> ClientResult<ComboOffer> {
        let draft = self.reprice(draft).await?;
        let submission = draft.to_submission()?;
        let updated = self.store.update_combo(id, &submission).await?;

        tracing::info!(
            combo_id = %id,
            original_price = %submission.original_price,
            price = %submission.price,
            "Combo updated"
        );
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.store.delete_combo(id).await?;
        tracing::info!(combo_id = %id, "Combo deleted");
        Ok(())
    }

    async fn reprice(&self, draft: &ComboDraft) -> ClientResult<ComboDraft> {
        let catalog = self.load_catalog().await?;
        let mut draft = draft.clone();
        let missing = draft.selection.refresh_prices(&catalog);
        if let Some(id) = missing.into_iter().next() {
            tracing::warn!(menu_item = %id, "Selected menu item no longer exists");
            return Err(ClientError::Pricing(PricingError::UnknownMenuItem(id)));
        }
        Ok(draft)
    }
}

/// Build an editor selection from `id × quantity` lines
///
/// Repeated ids are merged. Items that cannot be sold are rejected.
pub fn selection_from_lines(lines: &[ComboItem], catalog: &Catalog) -> Result<Selection, PricingError> {
    let mut selection = Selection::new();
    for line in lines {
        let item = catalog
            .get(&line.menu_item)
            .ok_or_else(|| PricingError::UnknownMenuItem(line.menu_item.clone()))?;
        selection.add(item, line.quantity)?;
    }
    Ok(selection)
}
