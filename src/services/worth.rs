use crate::error::{AppResult, DomainError};
use crate::models::item::{ItemInstance, ItemTemplate};
use crate::models::types::ItemId;
use crate::providers::CatalogProvider;
use crate::services::pricing::PricingService;
use std::collections::HashMap;
use std::sync::Arc;

/// Parent/child index over one flat inventory snapshot.
///
/// Built once per snapshot so composite valuation resolves ownership edges by
/// lookup instead of rescanning the flat list for every child.
pub struct InventoryIndex<'a> {
    items: &'a [ItemInstance],
    by_id: HashMap<ItemId, usize>,
    children: HashMap<ItemId, Vec<usize>>,
}

impl<'a> InventoryIndex<'a> {
    pub fn new(items: &'a [ItemInstance]) -> Self {
        let mut by_id = HashMap::with_capacity(items.len());
        let mut children: HashMap<ItemId, Vec<usize>> = HashMap::new();

        for (i, item) in items.iter().enumerate() {
            by_id.insert(item.id, i);
            if let Some(parent) = item.parent {
                children.entry(parent).or_default().push(i);
            }
        }

        Self { items, by_id, children }
    }

    pub fn find(&self, id: ItemId) -> Option<&'a ItemInstance> {
        self.by_id.get(&id).map(|&i| &self.items[i])
    }

    /// Every instance whose ownership chain leads back to `root`, excluding
    /// the root itself. The ownership edges form a tree, so each instance is
    /// visited once.
    pub fn subtree_of(&self, root: ItemId) -> Vec<&'a ItemInstance> {
        let mut out = Vec::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if let Some(indices) = self.children.get(&id) {
                for &i in indices {
                    out.push(&self.items[i]);
                    stack.push(self.items[i].id);
                }
            }
        }

        out
    }
}

/// Values a concrete item instance at settlement time.
///
/// Selected when the services are wired together, so an alternative formula
/// plugs in at construction without touching any caller.
pub trait WorthStrategy: Send + Sync {
    fn instance_worth(&self, root: &ItemInstance, index: &InventoryIndex<'_>) -> AppResult<f64>;
}

/// Wear-aware worth: corrected unit price, plus the contributions of every
/// attached item for composites, scaled down by depletion.
pub struct WearAdjustedWorth {
    catalog: Arc<dyn CatalogProvider>,
    pricing: Arc<PricingService>,
}

impl WearAdjustedWorth {
    pub fn new(catalog: Arc<dyn CatalogProvider>, pricing: Arc<PricingService>) -> Self {
        Self { catalog, pricing }
    }

    /// Single-level worth of one instance: its own corrected price under its
    /// own wear, times its stack count. Children are not explored here; the
    /// root call already enumerates the whole subtree once.
    fn single_worth(&self, item: &ItemInstance) -> AppResult<f64> {
        let template = self
            .catalog
            .template(item.template)
            .ok_or(DomainError::UnknownTemplate(item.template))?;

        let worth = self.pricing.unit_worth(item.template);
        Ok(apply_wear(worth, item, &template) * item.stack_count as f64)
    }
}

impl WorthStrategy for WearAdjustedWorth {
    fn instance_worth(&self, root: &ItemInstance, index: &InventoryIndex<'_>) -> AppResult<f64> {
        let template = self
            .catalog
            .template(root.template)
            .ok_or(DomainError::UnknownTemplate(root.template))?;

        let mut worth = self.pricing.unit_worth(root.template);
        for child in index.subtree_of(root.id) {
            worth += self.single_worth(child)?;
        }

        Ok(apply_wear(worth, root, &template) * root.stack_count as f64)
    }
}

/// Applies the wear branches to `worth` in their fixed order.
///
/// Each branch is gated on its typed wear field plus the template declaring
/// the matching capacity; branches that fire all operate on the running
/// worth. For a composite root, `worth` already includes the children.
fn apply_wear(mut worth: f64, item: &ItemInstance, template: &ItemTemplate) -> f64 {
    let wear = &item.wear;

    if let Some(dogtag) = &wear.dogtag {
        worth *= dogtag.level as f64;
    }

    if let Some(key) = &wear.key {
        if template.max_uses > 0 {
            let max_uses = template.max_uses as f64;
            worth = worth / max_uses * (max_uses - key.uses_spent as f64);
        }
    }

    if let Some(resource) = &wear.resource {
        if template.max_resource > 0.0 {
            worth = worth * 0.1 + worth * 0.9 / template.max_resource * resource.value;
        }
    }

    if let Some(side_effect) = &wear.side_effect {
        if template.max_resource > 0.0 {
            worth = worth * 0.1 + worth * 0.9 / template.max_resource * side_effect.value;
        }
    }

    if let Some(medkit) = &wear.medkit {
        if template.max_hp_resource > 0.0 {
            worth = worth / template.max_hp_resource * medkit.hp;
        }
    }

    if let Some(food_drink) = &wear.food_drink {
        if template.max_resource > 0.0 {
            worth = worth / template.max_resource * food_drink.percent;
        }
    }

    if let Some(repairable) = &wear.repairable {
        if template.armor_class > 0 {
            // the offset is non-zero only when the recorded max durability is
            // itself zero
            let offset = if repairable.max_durability == 0.0 { 0.01 } else { 0.0 };
            worth = worth * (repairable.max_durability / template.durability - offset)
                - (template.repair_cost * (repairable.max_durability - repairable.durability))
                    .floor();
        }
    }

    worth
}
