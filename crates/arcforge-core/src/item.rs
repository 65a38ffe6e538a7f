//! Item records as held by the catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ingredient id -> quantity required per unit produced.
pub type Materials = BTreeMap<String, u32>;

/// Type tag used when a record carries none.
pub const DEFAULT_TYPE: &str = "Unknown";

/// Rarity used when a record carries none.
pub const DEFAULT_RARITY: &str = "Common";

/// Items of this type are never weapon upgrade tiers, whatever their id says.
pub const MODIFICATION_TYPE: &str = "Modification";

/// Language tried when the configured one has no entry.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A display name, either a single string or one entry per language code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemName {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl ItemName {
    /// Resolve to a single string. A localized name without an entry for
    /// `language` uses its English entry, then `fallback`.
    pub fn resolve<'a>(&'a self, language: &str, fallback: &'a str) -> &'a str {
        match self {
            ItemName::Plain(name) => name,
            ItemName::Localized(names) => names
                .get(language)
                .or_else(|| names.get(DEFAULT_LANGUAGE))
                .map(String::as_str)
                .unwrap_or(fallback),
        }
    }
}

impl From<&str> for ItemName {
    fn from(name: &str) -> Self {
        ItemName::Plain(name.to_string())
    }
}

/// How an item is produced, after applying the upgrade-over-recipe
/// precedence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductionMethod<'a> {
    /// Upgraded from the previous tier by spending these materials.
    Upgrade(&'a Materials),
    /// Crafted from these ingredients.
    Recipe(&'a Materials),
}

impl<'a> ProductionMethod<'a> {
    pub fn materials(&self) -> &'a Materials {
        match self {
            ProductionMethod::Upgrade(m) | ProductionMethod::Recipe(m) => m,
        }
    }
}

/// A single catalog entry.
///
/// Every field but `id` is optional; accessors supply the documented
/// defaults so callers never deal with absence themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRecord {
    pub id: String,
    pub name: Option<ItemName>,
    pub item_type: Option<String>,
    pub rarity: Option<String>,
    pub image_filename: Option<String>,
    pub recipe: Option<Materials>,
    pub upgrade_cost: Option<Materials>,
}

impl ItemRecord {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<ItemName>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, item_type: &str) -> Self {
        self.item_type = Some(item_type.to_string());
        self
    }

    pub fn with_rarity(mut self, rarity: &str) -> Self {
        self.rarity = Some(rarity.to_string());
        self
    }

    pub fn with_image(mut self, filename: &str) -> Self {
        self.image_filename = Some(filename.to_string());
        self
    }

    pub fn with_recipe<'s>(mut self, entries: impl IntoIterator<Item = (&'s str, u32)>) -> Self {
        self.recipe = Some(materials(entries));
        self
    }

    pub fn with_upgrade_cost<'s>(
        mut self,
        entries: impl IntoIterator<Item = (&'s str, u32)>,
    ) -> Self {
        self.upgrade_cost = Some(materials(entries));
        self
    }

    /// Display name in `language`, falling back to the id.
    pub fn display_name(&self, language: &str) -> &str {
        match &self.name {
            Some(name) => name.resolve(language, &self.id),
            None => &self.id,
        }
    }

    pub fn item_type(&self) -> &str {
        self.item_type.as_deref().unwrap_or(DEFAULT_TYPE)
    }

    pub fn rarity(&self) -> &str {
        self.rarity.as_deref().unwrap_or(DEFAULT_RARITY)
    }

    /// The explicit image filename, if present and non-empty.
    pub fn image_filename(&self) -> Option<&str> {
        self.image_filename.as_deref().filter(|f| !f.is_empty())
    }

    pub fn is_weapon_eligible(&self) -> bool {
        crate::tier::is_weapon_eligible(self.item_type())
    }

    /// The effective production mechanism. An empty mapping counts as
    /// absent, and a populated upgrade cost shadows any recipe.
    pub fn production(&self) -> Option<ProductionMethod<'_>> {
        if let Some(cost) = self.upgrade_cost.as_ref().filter(|m| !m.is_empty()) {
            return Some(ProductionMethod::Upgrade(cost));
        }
        self.recipe
            .as_ref()
            .filter(|m| !m.is_empty())
            .map(ProductionMethod::Recipe)
    }

    pub fn has_recipe(&self) -> bool {
        self.recipe.as_ref().is_some_and(|m| !m.is_empty())
    }
}

fn materials<'s>(entries: impl IntoIterator<Item = (&'s str, u32)>) -> Materials {
    entries
        .into_iter()
        .map(|(id, qty)| (id.to_string(), qty))
        .collect()
}
