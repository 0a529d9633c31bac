use crate::error::{AppResult, DomainError};
use crate::models::item::{ItemInstance, ItemTemplate};
use crate::models::offer::Offer;
use crate::models::types::{OwnerId, TemplateId, TraderId};
use crate::providers::{CatalogProvider, InventoryProvider, OfferStore, PriceProvider, TradeExecutor};
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory catalog built once from a snapshot. Read-only afterwards, so no
/// locking is needed.
pub struct MemCatalog {
    templates: HashMap<TemplateId, Arc<ItemTemplate>>,
}

impl MemCatalog {
    pub fn new(templates: Vec<ItemTemplate>) -> Self {
        Self {
            templates: templates
                .into_iter()
                .map(|t| (t.id, Arc::new(t)))
                .collect(),
        }
    }
}

impl CatalogProvider for MemCatalog {
    fn template(&self, id: TemplateId) -> Option<Arc<ItemTemplate>> {
        self.templates.get(&id).cloned()
    }

    fn sellable_templates(&self) -> Vec<Arc<ItemTemplate>> {
        self.templates
            .values()
            .filter(|t| t.sellable)
            .cloned()
            .collect()
    }
}

/// Offer snapshot grouped by template at construction time.
#[derive(Default)]
pub struct MemOfferStore {
    by_template: HashMap<TemplateId, Vec<Offer>>,
}

impl MemOfferStore {
    pub fn new(offers: Vec<Offer>) -> Self {
        let mut by_template: HashMap<TemplateId, Vec<Offer>> = HashMap::new();
        for offer in offers {
            by_template.entry(offer.template).or_default().push(offer);
        }
        Self { by_template }
    }
}

impl OfferStore for MemOfferStore {
    fn offers_for(&self, template: TemplateId) -> Vec<Offer> {
        self.by_template.get(&template).cloned().unwrap_or_default()
    }

    fn all_offers(&self) -> Vec<Offer> {
        self.by_template.values().flatten().cloned().collect()
    }
}

/// Baseline feed backed by a plain map.
#[derive(Default)]
pub struct MemPriceTable {
    prices: HashMap<TemplateId, f64>,
}

impl MemPriceTable {
    pub fn new(prices: HashMap<TemplateId, f64>) -> Self {
        Self { prices }
    }
}

impl PriceProvider for MemPriceTable {
    fn baseline_price(&self, template: TemplateId) -> Option<f64> {
        self.prices.get(&template).copied()
    }
}

/// Per-owner inventory snapshots.
#[derive(Default)]
pub struct MemInventory {
    by_owner: HashMap<OwnerId, Vec<ItemInstance>>,
}

impl MemInventory {
    pub fn new(by_owner: HashMap<OwnerId, Vec<ItemInstance>>) -> Self {
        Self { by_owner }
    }
}

impl InventoryProvider for MemInventory {
    fn items_of(&self, owner: OwnerId) -> Option<Vec<ItemInstance>> {
        self.by_owner.get(&owner).cloned()
    }
}

/// Placeholder executor for read-only deployments; every sale is rejected.
pub struct RejectingTrades;

impl TradeExecutor for RejectingTrades {
    fn execute_sale(
        &self,
        _owner: OwnerId,
        _item: &ItemInstance,
        _trader: TraderId,
        _price: u64,
    ) -> AppResult<()> {
        Err(DomainError::TradeRejected(
            "no trade backend configured".to_string(),
        ))
    }
}
