use crate::error::AppResult;
use crate::models::item::{ItemInstance, ItemTemplate};
use crate::models::offer::Offer;
use crate::models::types::{OwnerId, TemplateId, TraderId};
use std::sync::Arc;

pub mod mem;

/// Baseline reference prices from the external pricing feed. The feed may be
/// stale relative to live offers; the correction layer reconciles the two.
pub trait PriceProvider: Send + Sync {
    fn baseline_price(&self, template: TemplateId) -> Option<f64>;
}

/// Live market listings. How offers enter the store is not this crate's
/// concern; both methods return a snapshot the core never mutates.
pub trait OfferStore: Send + Sync {
    fn offers_for(&self, template: TemplateId) -> Vec<Offer>;
    fn all_offers(&self) -> Vec<Offer>;
}

/// The item catalog. Templates are immutable and shared by reference.
pub trait CatalogProvider: Send + Sync {
    fn template(&self, id: TemplateId) -> Option<Arc<ItemTemplate>>;

    /// Every template flagged sellable, containers included; the full-catalog
    /// scan filters those out by kind.
    fn sellable_templates(&self) -> Vec<Arc<ItemTemplate>>;
}

/// Flat per-owner inventory snapshots, used to resolve parent/child edges at
/// settlement time. `None` means the owner is unknown.
pub trait InventoryProvider: Send + Sync {
    fn items_of(&self, owner: OwnerId) -> Option<Vec<ItemInstance>>;
}

/// Executes a sale and persists the resulting state change. Persistence lives
/// entirely behind this boundary.
pub trait TradeExecutor: Send + Sync {
    fn execute_sale(
        &self,
        owner: OwnerId,
        item: &ItemInstance,
        trader: TraderId,
        price: u64,
    ) -> AppResult<()>;
}
