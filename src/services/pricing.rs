use crate::config::Config;
use crate::models::item::TemplateKind;
use crate::models::offer::{Offer, SellerKind};
use crate::models::types::TemplateId;
use crate::providers::{CatalogProvider, OfferStore, PriceProvider};
use crate::services::correction::OutlierCorrection;
use crate::services::market;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// One priced catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplatePrice {
    pub template: TemplateId,
    pub price: i64,
}

/// Market price lookups over the current catalog/offer snapshot.
///
/// Holds only read-only collaborators and configuration; every lookup is an
/// independent pass over the snapshot.
pub struct PricingService {
    catalog: Arc<dyn CatalogProvider>,
    baseline: Arc<dyn PriceProvider>,
    offers: Arc<dyn OfferStore>,
    correction: OutlierCorrection,
    config: Arc<Config>,
}

impl PricingService {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        baseline: Arc<dyn PriceProvider>,
        offers: Arc<dyn OfferStore>,
        config: Arc<Config>,
    ) -> Self {
        let correction = OutlierCorrection::new(&config.correction);
        Self {
            catalog,
            baseline,
            offers,
            correction,
            config,
        }
    }

    /// Corrected, multiplier-applied unit worth for one template. Falls back
    /// to the bare baseline when the market has no player listings.
    pub fn unit_worth(&self, template: TemplateId) -> f64 {
        let baseline = self.baseline.baseline_price(template).unwrap_or(0.0);
        let mean = market::player_unit_mean(&self.offers.offers_for(template));
        self.correction.reconcile(baseline, mean) * self.config.multiplier(template)
    }

    /// Average listing price for one template, floored to whole currency.
    ///
    /// `None` when no player listings exist or the floored result is not
    /// positive.
    pub fn single_price(&self, template: TemplateId) -> Option<i64> {
        let offers = self.offers.offers_for(template);
        let mean = market::player_unit_mean(&offers)?;

        let baseline = self.baseline.baseline_price(template).unwrap_or(0.0);
        let corrected =
            self.correction.reconcile(baseline, Some(mean)) * self.config.multiplier(template);

        let price = corrected.floor() as i64;
        (price > 0).then_some(price)
    }

    /// Prices for a batch of templates, each computed independently; 0 stands
    /// in for "no price".
    pub fn batch_prices(&self, templates: &[TemplateId]) -> Vec<TemplatePrice> {
        templates
            .iter()
            .map(|&template| TemplatePrice {
                template,
                price: self.single_price(template).unwrap_or(0),
            })
            .collect()
    }

    /// Prices every sellable, non-container template against the current
    /// offer snapshot.
    ///
    /// A zero price is logged as an anomaly and kept; the scan never aborts.
    pub fn all_prices(&self) -> Vec<TemplatePrice> {
        let mut by_template: HashMap<TemplateId, Vec<Offer>> = HashMap::new();
        for offer in self.offers.all_offers() {
            if offer.seller == SellerKind::Trader {
                continue;
            }
            by_template.entry(offer.template).or_default().push(offer);
        }

        let mut prices = Vec::new();
        for template in self.catalog.sellable_templates() {
            if template.kind == TemplateKind::Container {
                continue;
            }

            let mean = by_template
                .get(&template.id)
                .and_then(|offers| market::player_unit_mean(offers));
            let baseline = self.baseline.baseline_price(template.id).unwrap_or(0.0);
            let corrected =
                self.correction.reconcile(baseline, mean) * self.config.multiplier(template.id);

            let price = corrected.floor() as i64;
            if price == 0 {
                tracing::warn!(template=%template.id, "catalog scan produced a zero price");
            }

            prices.push(TemplatePrice {
                template: template.id,
                price,
            });
        }

        prices
    }
}
