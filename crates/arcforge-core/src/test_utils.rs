//! Shared fixtures for unit tests, integration tests, and property tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`.

use crate::catalog::Catalog;
use crate::item::{ItemName, ItemRecord, MODIFICATION_TYPE};
use std::collections::BTreeMap;

// ===========================================================================
// Workshop: a plain three-level recipe chain
// ===========================================================================

/// `wood` (base) <- `plank` (2 wood) <- `table` (4 plank).
pub fn workshop_records() -> Vec<ItemRecord> {
    vec![
        ItemRecord::new("wood").with_name("Wood").with_type("Basic Material"),
        ItemRecord::new("plank")
            .with_name("Plank")
            .with_type("Refined Material")
            .with_recipe([("wood", 2)]),
        ItemRecord::new("table")
            .with_name("Table")
            .with_type("Quick Use")
            .with_rarity("Uncommon")
            .with_recipe([("plank", 4)]),
    ]
}

pub fn workshop_catalog() -> Catalog {
    workshop_records().into_iter().collect()
}

// ===========================================================================
// Armory: a four-tier weapon chain plus a modification
// ===========================================================================

/// `rifle_i` is crafted; `rifle_ii`..`rifle_iv` are upgrades. `scope_ii`
/// is a Modification whose id happens to carry a tier suffix.
pub fn armory_records() -> Vec<ItemRecord> {
    vec![
        ItemRecord::new("mat_a").with_name("Metal Parts"),
        ItemRecord::new("mat_b").with_name("Mechanical Components"),
        ItemRecord::new("rifle_i")
            .with_name(localized("Rifle I", "Fusil I"))
            .with_type("Weapon")
            .with_recipe([("mat_a", 5)]),
        ItemRecord::new("rifle_ii")
            .with_name(localized("Rifle II", "Fusil II"))
            .with_type("Weapon")
            .with_upgrade_cost([("mat_a", 2)]),
        ItemRecord::new("rifle_iii")
            .with_name(localized("Rifle III", "Fusil III"))
            .with_type("Weapon")
            .with_upgrade_cost([("mat_a", 3), ("mat_b", 1)]),
        ItemRecord::new("rifle_iv")
            .with_name(localized("Rifle IV", "Fusil IV"))
            .with_type("Weapon")
            .with_rarity("Epic")
            .with_upgrade_cost([("mat_a", 4), ("mat_b", 2)]),
        ItemRecord::new("scope_ii")
            .with_name("Scope II")
            .with_type(MODIFICATION_TYPE)
            .with_recipe([("mat_b", 1)]),
    ]
}

pub fn armory_catalog() -> Catalog {
    armory_records().into_iter().collect()
}

/// Workshop and armory together.
pub fn full_catalog() -> Catalog {
    workshop_records()
        .into_iter()
        .chain(armory_records())
        .collect()
}

/// An `en`/`fr` localized name.
pub fn localized(en: &str, fr: &str) -> ItemName {
    ItemName::Localized(BTreeMap::from([
        ("en".to_string(), en.to_string()),
        ("fr".to_string(), fr.to_string()),
    ]))
}
