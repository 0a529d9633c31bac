use crate::config::Config;
use crate::providers::{CatalogProvider, InventoryProvider, OfferStore, PriceProvider, TradeExecutor};
use crate::services::worth::WearAdjustedWorth;
use crate::services::{PricingService, SettlementService};
use std::sync::Arc;

/// External collaborators the valuation core reads from.
pub struct Providers {
    pub catalog: Arc<dyn CatalogProvider>,
    pub baseline: Arc<dyn PriceProvider>,
    pub offers: Arc<dyn OfferStore>,
    pub inventory: Arc<dyn InventoryProvider>,
    pub trades: Arc<dyn TradeExecutor>,
}

pub struct Services {
    pub pricing: Arc<PricingService>,
    pub settlement: Arc<SettlementService>,
}

pub struct Registry {
    pub providers: Arc<Providers>,
    pub services: Arc<Services>,
    pub config: Arc<Config>,
}

impl Registry {
    pub fn new(providers: Providers, config: Config) -> Self {
        let providers = Arc::new(providers);
        let config = Arc::new(config);

        let pricing = Arc::new(PricingService::new(
            providers.catalog.clone(),
            providers.baseline.clone(),
            providers.offers.clone(),
            config.clone(),
        ));

        let strategy = Arc::new(WearAdjustedWorth::new(
            providers.catalog.clone(),
            pricing.clone(),
        ));

        let settlement = Arc::new(SettlementService::new(
            providers.inventory.clone(),
            strategy,
            providers.trades.clone(),
        ));

        let services = Arc::new(Services {
            pricing,
            settlement,
        });

        Self {
            providers,
            services,
            config,
        }
    }
}
