//! Serde data file structs for item records.
//!
//! One item per file. Field names follow the camelCase used by the game
//! data exports; fields this crate does not use are ignored.

use arcforge_core::item::{ItemName, ItemRecord, Materials};
use serde::Deserialize;

/// An item definition as stored on disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemData {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<ItemName>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub image_filename: Option<String>,
    #[serde(default)]
    pub recipe: Option<Materials>,
    #[serde(default)]
    pub upgrade_cost: Option<Materials>,
}

impl ItemData {
    /// Convert into a catalog record. Records without a non-empty id have
    /// nothing to be keyed by and yield `None`.
    pub fn into_record(self) -> Option<ItemRecord> {
        let id = self.id.filter(|id| !id.is_empty())?;
        Some(ItemRecord {
            id,
            name: self.name,
            item_type: self.item_type,
            rarity: self.rarity,
            image_filename: self.image_filename,
            recipe: self.recipe,
            upgrade_cost: self.upgrade_cost,
        })
    }
}
