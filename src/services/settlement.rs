use crate::error::{AppResult, DomainError};
use crate::models::types::{ItemId, OwnerId, TraderId};
use crate::providers::{InventoryProvider, TradeExecutor};
use crate::services::worth::{InventoryIndex, WorthStrategy};
use std::sync::Arc;

/// Settlement-time valuation and hand-off of items changing ownership.
pub struct SettlementService {
    inventory: Arc<dyn InventoryProvider>,
    strategy: Arc<dyn WorthStrategy>,
    trades: Arc<dyn TradeExecutor>,
}

impl SettlementService {
    pub fn new(
        inventory: Arc<dyn InventoryProvider>,
        strategy: Arc<dyn WorthStrategy>,
        trades: Arc<dyn TradeExecutor>,
    ) -> Self {
        Self {
            inventory,
            strategy,
            trades,
        }
    }

    /// Wear-aware worth of one concrete instance, attached children included.
    pub fn valuate(&self, owner: OwnerId, item: ItemId) -> AppResult<f64> {
        let items = self
            .inventory
            .items_of(owner)
            .ok_or(DomainError::UnknownOwner(owner))?;

        let index = InventoryIndex::new(&items);
        let root = index
            .find(item)
            .ok_or(DomainError::ItemNotFound { owner, item })?;

        self.strategy.instance_worth(root, &index)
    }

    /// Sells `item` to `trader` at the quoted price.
    ///
    /// Failures are reported to the caller as `false` with a logged
    /// diagnostic; nothing propagates past this boundary.
    pub fn sell_to_trader(&self, owner: OwnerId, item: ItemId, trader: TraderId, price: u64) -> bool {
        let Some(items) = self.inventory.items_of(owner) else {
            tracing::error!(%owner, %item, %trader, price, "sell to trader: owner has no inventory");
            return false;
        };

        let Some(instance) = items.iter().find(|it| it.id == item) else {
            tracing::error!(%owner, %item, %trader, price, "sell to trader: item not found in inventory");
            return false;
        };

        if let Err(e) = self.trades.execute_sale(owner, instance, trader, price) {
            tracing::error!(error=%e, %owner, %item, %trader, price, "sell to trader: trade failed");
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::item::{ItemInstance, ItemTemplate, TemplateKind, WearState};
    use crate::models::types::TemplateId;
    use crate::providers::mem::{
        MemCatalog, MemInventory, MemOfferStore, MemPriceTable, RejectingTrades,
    };
    use crate::services::pricing::PricingService;
    use crate::services::worth::WearAdjustedWorth;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Records every sale it is asked to execute.
    #[derive(Default)]
    struct RecordingTrades {
        sales: Mutex<Vec<(OwnerId, ItemId, TraderId, u64)>>,
    }

    impl TradeExecutor for RecordingTrades {
        fn execute_sale(
            &self,
            owner: OwnerId,
            item: &ItemInstance,
            trader: TraderId,
            price: u64,
        ) -> AppResult<()> {
            self.sales
                .lock()
                .unwrap()
                .push((owner, item.id, trader, price));
            Ok(())
        }
    }

    fn template(id: TemplateId) -> ItemTemplate {
        ItemTemplate {
            id,
            name: "test item".to_string(),
            kind: TemplateKind::Regular,
            sellable: true,
            max_uses: 0,
            max_resource: 0.0,
            max_hp_resource: 0.0,
            durability: 0.0,
            armor_class: 0,
            repair_cost: 0.0,
        }
    }

    fn instance(template: TemplateId, parent: Option<ItemId>) -> ItemInstance {
        ItemInstance {
            id: ItemId::new(),
            template,
            stack_count: 1,
            wear: WearState::default(),
            parent,
        }
    }

    fn service(
        templates: Vec<ItemTemplate>,
        baselines: Vec<(TemplateId, f64)>,
        inventories: HashMap<OwnerId, Vec<ItemInstance>>,
        trades: Arc<dyn TradeExecutor>,
    ) -> SettlementService {
        let catalog = Arc::new(MemCatalog::new(templates));
        let pricing = Arc::new(PricingService::new(
            catalog.clone(),
            Arc::new(MemPriceTable::new(baselines.into_iter().collect())),
            Arc::new(MemOfferStore::default()),
            Arc::new(Config::default()),
        ));
        SettlementService::new(
            Arc::new(MemInventory::new(inventories)),
            Arc::new(WearAdjustedWorth::new(catalog, pricing)),
            trades,
        )
    }

    #[test]
    fn t_valuate_composite() {
        let bag = TemplateId::new();
        let coin = TemplateId::new();
        let owner = OwnerId::new();

        let root = instance(bag, None);
        let mut child = instance(coin, Some(root.id));
        child.stack_count = 5;
        let root_id = root.id;

        let svc = service(
            vec![template(bag), template(coin)],
            vec![(bag, 300.0), (coin, 10.0)],
            HashMap::from([(owner, vec![root, child])]),
            Arc::new(RejectingTrades),
        );

        assert_eq!(svc.valuate(owner, root_id).unwrap(), 350.0);
    }

    #[test]
    fn t_valuate_unknown_owner() {
        let svc = service(vec![], vec![], HashMap::new(), Arc::new(RejectingTrades));
        let r = svc.valuate(OwnerId::new(), ItemId::new());
        assert!(matches!(r, Err(DomainError::UnknownOwner(_))));
    }

    #[test]
    fn t_valuate_unknown_item() {
        let owner = OwnerId::new();
        let svc = service(
            vec![],
            vec![],
            HashMap::from([(owner, vec![])]),
            Arc::new(RejectingTrades),
        );
        let r = svc.valuate(owner, ItemId::new());
        assert!(matches!(r, Err(DomainError::ItemNotFound { .. })));
    }

    #[test]
    fn t_sell_reaches_executor() {
        let tid = TemplateId::new();
        let owner = OwnerId::new();
        let trader = TraderId::new();

        let item = instance(tid, None);
        let item_id = item.id;
        let trades = Arc::new(RecordingTrades::default());

        let svc = service(
            vec![template(tid)],
            vec![(tid, 100.0)],
            HashMap::from([(owner, vec![item])]),
            trades.clone(),
        );

        assert!(svc.sell_to_trader(owner, item_id, trader, 90));
        assert_eq!(
            trades.sales.lock().unwrap().as_slice(),
            &[(owner, item_id, trader, 90)]
        );
    }

    #[test]
    fn t_sell_unknown_owner_reports_false() {
        let svc = service(vec![], vec![], HashMap::new(), Arc::new(RejectingTrades));
        assert!(!svc.sell_to_trader(OwnerId::new(), ItemId::new(), TraderId::new(), 100));
    }

    #[test]
    fn t_sell_unknown_item_reports_false() {
        let owner = OwnerId::new();
        let svc = service(
            vec![],
            vec![],
            HashMap::from([(owner, vec![])]),
            Arc::new(RejectingTrades),
        );
        assert!(!svc.sell_to_trader(owner, ItemId::new(), TraderId::new(), 100));
    }

    #[test]
    fn t_sell_executor_failure_reports_false() {
        let tid = TemplateId::new();
        let owner = OwnerId::new();
        let item = instance(tid, None);
        let item_id = item.id;

        let svc = service(
            vec![template(tid)],
            vec![],
            HashMap::from([(owner, vec![item])]),
            Arc::new(RejectingTrades),
        );

        assert!(!svc.sell_to_trader(owner, item_id, TraderId::new(), 100));
    }
}
