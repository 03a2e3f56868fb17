//! In-memory backend for service tests

use crate::api::{CatalogSource, ComboStore};
use crate::ClientResult;
use async_trait::async_trait;
use shared::error::{AppError, ErrorCode};
use shared::models::{ComboOffer, ComboSubmission, MenuItem, PriceWarning};
use std::collections::HashSet;
use std::sync::Mutex;

pub struct InMemoryBackend {
    menu: Vec<MenuItem>,
    combos: Mutex<Vec<ComboOffer>>,
    saves: Mutex<Vec<(String, Option<PriceWarning>)>>,
    failing_saves: HashSet<String>,
}

impl InMemoryBackend {
    pub fn new(menu: Vec<MenuItem>, combos: Vec<ComboOffer>) -> Self {
        Self {
            menu,
            combos: Mutex::new(combos),
            saves: Mutex::new(Vec::new()),
            failing_saves: HashSet::new(),
        }
    }

    /// Make `save_price_warning` fail for this combo
    pub fn fail_saves_for(mut self, id: &str) -> Self {
        self.failing_saves.insert(id.to_string());
        self
    }

    pub fn combos(&self) -> Vec<ComboOffer> {
        self.combos.lock().unwrap().clone()
    }

    pub fn saves(&self) -> Vec<(String, Option<PriceWarning>)> {
        self.saves.lock().unwrap().clone()
    }
}

fn combo_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::ComboNotFound).with_detail("id", id)
}

fn apply(combo: &mut ComboOffer, submission: &ComboSubmission) {
    combo.name = submission.name.clone();
    combo.description = submission.description.clone();
    combo.items = submission.items.clone();
    combo.discount = submission.discount;
    combo.original_price = submission.original_price;
    combo.price = submission.price;
    combo.valid_from = submission.valid_from;
    combo.valid_until = submission.valid_until;
    combo.is_active = submission.is_active;
    combo.price_warning = submission.price_warning.clone();
}

#[async_trait]
impl CatalogSource for InMemoryBackend {
    async fn list_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        Ok(self.menu.clone())
    }
}

#[async_trait]
impl ComboStore for InMemoryBackend {
    async fn list_combos(&self) -> ClientResult<Vec<ComboOffer>> {
        Ok(self.combos())
    }

    async fn get_combo(&self, id: &str) -> ClientResult<ComboOffer> {
        self.combos
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| combo_not_found(id).into())
    }

    async fn create_combo(&self, submission: &ComboSubmission) -> ClientResult<ComboOffer> {
        let mut combos = self.combos.lock().unwrap();
        let mut combo = ComboOffer {
            id: format!("c{}", combos.len() + 1),
            name: String::new(),
            description: String::new(),
            items: Vec::new(),
            discount: Default::default(),
            original_price: Default::default(),
            price: Default::default(),
            valid_from: None,
            valid_until: None,
            is_active: true,
            price_warning: None,
        };
        apply(&mut combo, submission);
        combos.push(combo.clone());
        Ok(combo)
    }

    async fn update_combo(&self, id: &str, submission: &ComboSubmission) -> ClientResult<ComboOffer> {
        let mut combos = self.combos.lock().unwrap();
        let combo = combos
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| combo_not_found(id))?;
        apply(combo, submission);
        Ok(combo.clone())
    }

    async fn delete_combo(&self, id: &str) -> ClientResult<()> {
        let mut combos = self.combos.lock().unwrap();
        let before = combos.len();
        combos.retain(|c| c.id != id);
        if combos.len() == before {
            return Err(combo_not_found(id).into());
        }
        Ok(())
    }

    async fn save_price_warning(&self, id: &str, warning: Option<&PriceWarning>) -> ClientResult<()> {
        if self.failing_saves.contains(id) {
            return Err(AppError::with_message(ErrorCode::DatabaseError, "write failed").into());
        }
        let mut combos = self.combos.lock().unwrap();
        let combo = combos
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| combo_not_found(id))?;
        combo.price_warning = warning.cloned();
        self.saves
            .lock()
            .unwrap()
            .push((id.to_string(), warning.cloned()));
        Ok(())
    }
}
