//! Request and response records.

use arcforge_core::display::DisplayRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direct requirements for a whole selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Item id -> quantity. Quantities must be positive.
    #[serde(default)]
    pub items: BTreeMap<String, i64>,
}

/// Direct requirements for a single item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandRequest {
    #[serde(default)]
    pub item_id: Option<String>,
    /// Defaults to 1.
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl ExpandRequest {
    pub fn new(item_id: &str, quantity: i64) -> Self {
        Self {
            item_id: Some(item_id.to_string()),
            quantity: Some(quantity),
        }
    }
}

/// Display data for a single item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRequest {
    #[serde(default)]
    pub item_id: Option<String>,
}

/// One entry of the item listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedItem {
    #[serde(flatten)]
    pub info: DisplayRecord,
    /// Whether the item can be expanded into ingredients.
    pub has_recipe: bool,
}

/// One line of an expansion result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementLine {
    #[serde(flatten)]
    pub info: DisplayRecord,
    pub quantity: u64,
    /// False for base resources.
    pub can_expand: bool,
}

/// Case-insensitive name order, ties broken by id.
pub(crate) fn by_name(a: &DisplayRecord, b: &DisplayRecord) -> std::cmp::Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}
