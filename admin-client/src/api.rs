//! Backend collaborators
//!
//! The catalog and combo stores are traits so the services can run against
//! the REST backend or an in-memory double.

use crate::{ClientResult, HttpClient};
use async_trait::async_trait;
use shared::models::{ComboOffer, ComboSubmission, MenuItem, PriceWarning, PriceWarningUpdate};

/// Read access to the menu catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_menu_items(&self) -> ClientResult<Vec<MenuItem>>;
}

/// Persistence for combo offers
#[async_trait]
pub trait ComboStore: Send + Sync {
    async fn list_combos(&self) -> ClientResult<Vec<ComboOffer>>;

    async fn get_combo(&self, id: &str) -> ClientResult<ComboOffer>;

    async fn create_combo(&self, submission: &ComboSubmission) -> ClientResult<ComboOffer>;

    async fn update_combo(&self, id: &str, submission: &ComboSubmission) -> ClientResult<ComboOffer>;

    async fn delete_combo(&self, id: &str) -> ClientResult<()>;

    /// Store a recheck result; `None` clears the warning
    async fn save_price_warning(&self, id: &str, warning: Option<&PriceWarning>) -> ClientResult<()>;
}

const MENU_ITEMS: &str = "/api/menu-items";
const COMBOS: &str = "/api/combos";

fn combo_path(id: &str) -> String {
    format!("{}/{}", COMBOS, urlencoding::encode(id))
}

#[async_trait]
impl CatalogSource for HttpClient {
    async fn list_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.get(MENU_ITEMS).await
    }
}

#[async_trait]
impl ComboStore for HttpClient {
    async fn list_combos(&self) -> ClientResult<Vec<ComboOffer>> {
        self.get(COMBOS).await
    }

    async fn get_combo(&self, id: &str) -> ClientResult<ComboOffer> {
        self.get(&combo_path(id)).await
    }

    async fn create_combo(&self, submission: &ComboSubmission) -> ClientResult<ComboOffer> {
        self.post(COMBOS, submission).await
    }

    async fn update_combo(&self, id: &str, submission: &ComboSubmission) -> ClientResult<ComboOffer> {
        self.put(&combo_path(id), submission).await
    }

    async fn delete_combo(&self, id: &str) -> ClientResult<()> {
        self.delete::<Option<serde_json::Value>>(&combo_path(id))
            .await
            .map(|_| ())
    }

    async fn save_price_warning(&self, id: &str, warning: Option<&PriceWarning>) -> ClientResult<()> {
        let body = PriceWarningUpdate {
            price_warning: warning.cloned(),
        };
        self.patch::<Option<serde_json::Value>, _>(&format!("{}/price-warning", combo_path(id)), &body)
            .await
            .map(|_| ())
    }
}
