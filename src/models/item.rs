use crate::models::types::{ItemId, TemplateId};
use serde::{Deserialize, Serialize};

/// Catalog entry for one item type.
///
/// Loaded once at startup and shared by reference across every instance of
/// the type; a valuation pass never mutates it. Capacity fields use 0 for
/// "not declared", which disables the matching wear branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub id: TemplateId,

    /// Display name (e.g. "Factory exit key")
    pub name: String,

    /// Container templates are skipped by the full-catalog scan
    #[serde(default)]
    pub kind: TemplateKind,

    /// Whether the type may be listed on the market at all
    #[serde(default)]
    pub sellable: bool,

    /// Maximum number of uses for usage-limited items such as keys
    #[serde(default)]
    pub max_uses: u32,

    /// Maximum depletable resource (fuel units, charges)
    #[serde(default)]
    pub max_resource: f64,

    /// Maximum hit-point resource for medical items
    #[serde(default)]
    pub max_hp_resource: f64,

    /// Factory durability, the denominator of the durability modifier
    #[serde(default)]
    pub durability: f64,

    /// Protective rating; the durability modifier only applies when positive
    #[serde(default)]
    pub armor_class: u32,

    /// Currency cost per missing durability point
    #[serde(default)]
    pub repair_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    #[default]
    Regular,
    Container,
}

/// A concrete item in an inventory.
///
/// Instances with a `parent` edge hang off a container instance; the edges
/// form a tree with no cycles, rooted at the container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemInstance {
    pub id: ItemId,

    /// Reference to the catalog template
    pub template: TemplateId,

    /// Stack size (1 for non-stackable items)
    #[serde(default = "default_stack_count")]
    pub stack_count: u32,

    #[serde(default)]
    pub wear: WearState,

    /// Owning instance, for items nested inside a container
    #[serde(default)]
    pub parent: Option<ItemId>,
}

fn default_stack_count() -> u32 {
    1
}

/// Depletion/condition state of a single instance.
///
/// One typed field per wear kind; an absent field skips the matching
/// valuation branch. Several fields may be set at once, in which case every
/// matching branch applies in its fixed order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WearState {
    #[serde(default)]
    pub dogtag: Option<Dogtag>,

    #[serde(default)]
    pub key: Option<KeyUsage>,

    /// Primary depletable resource (fuel, charges)
    #[serde(default)]
    pub resource: Option<ResourceLevel>,

    /// Secondary resource drained as a side effect of use; valued the same
    /// way as the primary one
    #[serde(default)]
    pub side_effect: Option<ResourceLevel>,

    #[serde(default)]
    pub medkit: Option<HpResource>,

    #[serde(default)]
    pub food_drink: Option<FoodDrink>,

    #[serde(default)]
    pub repairable: Option<Repairable>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dogtag {
    /// Tier of the defeated player; scales the worth multiplicatively
    pub level: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KeyUsage {
    pub uses_spent: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResourceLevel {
    /// Remaining amount, out of the template's `max_resource`
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HpResource {
    /// Remaining hit points, out of the template's `max_hp_resource`
    pub hp: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FoodDrink {
    /// Remaining portion, out of the template's `max_resource`
    pub percent: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Repairable {
    /// Current durability of this instance
    pub durability: f64,

    /// Ceiling the instance can be repaired back to; drops below the
    /// template's factory durability as the item degrades
    pub max_durability: f64,
}
