//! Presentation-ready item records.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::item::{DEFAULT_LANGUAGE, DEFAULT_RARITY};
use crate::tier::{Tier, TierInfo};

/// Where images live and which language names resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Directory prefix for every image path.
    pub image_dir: String,
    /// Extension for images derived from an id.
    pub image_extension: String,
    /// Language code preferred when a name is localized.
    pub language: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            image_dir: "static/images".to_string(),
            image_extension: "png".to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl DisplayConfig {
    /// Path of an explicitly named image file.
    pub fn image_path(&self, filename: &str) -> String {
        let dir = self.image_dir.trim_end_matches('/');
        if dir.is_empty() {
            filename.to_string()
        } else {
            format!("{dir}/{filename}")
        }
    }

    /// Path of the image named after `item_id` by convention.
    pub fn conventional_image(&self, item_id: &str) -> String {
        self.image_path(&format!("{item_id}.{}", self.image_extension))
    }
}

/// Upgrade badge shown on tiers above I.
///
/// `required_level` is the tier the player must already own, which is what
/// the badge displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpgradeOverlay {
    pub weapon_upgrade: bool,
    pub upgrade_level: Tier,
    pub required_level: Tier,
}

impl UpgradeOverlay {
    /// The overlay for `tier`, or `None` for tier I.
    pub fn for_tier(tier: Tier) -> Option<Self> {
        tier.previous().map(|required_level| Self {
            weapon_upgrade: true,
            upgrade_level: tier,
            required_level,
        })
    }
}

/// Denormalized view of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub id: String,
    pub name: String,
    pub image: String,
    pub rarity: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub upgrade: Option<UpgradeOverlay>,
}

/// Resolve the display record for `item_id`.
///
/// Unknown ids get the id as name, the conventional image, and default
/// rarity and type.
pub fn item_info(catalog: &Catalog, config: &DisplayConfig, item_id: &str) -> DisplayRecord {
    let record = catalog.get(item_id);
    let tier = catalog.tier_info(item_id);

    let explicit_image = record.and_then(|r| r.image_filename());
    let image = match (explicit_image, tier) {
        (Some(filename), _) => config.image_path(filename),
        (None, TierInfo::Tier { base_id, .. }) => config.conventional_image(base_id),
        (None, TierInfo::NotATier) => config.conventional_image(item_id),
    };

    DisplayRecord {
        id: item_id.to_string(),
        name: record
            .map_or(item_id, |r| r.display_name(&config.language))
            .to_string(),
        image,
        rarity: record.map_or(DEFAULT_RARITY, |r| r.rarity()).to_string(),
        item_type: catalog.item_type(item_id).to_string(),
        upgrade: tier.tier().and_then(UpgradeOverlay::for_tier),
    }
}
