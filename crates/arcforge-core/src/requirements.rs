//! One-level requirement expansion.
//!
//! [`expand`] replaces each selected item with its immediate ingredients:
//! the upgrade cost plus one unit of the previous tier for upgradeable
//! weapons, otherwise the recipe. Ingredients that are themselves craftable
//! are returned as-is; callers go deeper by expanding the result again.

use crate::catalog::Catalog;
use crate::item::ProductionMethod;
use crate::tier::previous_tier_id;
use std::collections::BTreeMap;

/// Errors raised while building a [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequirementError {
    #[error("quantity for '{item}' must be positive, got {quantity}")]
    NonPositiveQuantity { item: String, quantity: i64 },
}

/// Selected items and how many of each to produce. Every quantity is positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    items: BTreeMap<String, u64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection holding a single item.
    pub fn single(item_id: &str, quantity: u64) -> Result<Self, RequirementError> {
        let mut selection = Self::new();
        selection.add(item_id, quantity)?;
        Ok(selection)
    }

    /// Build from caller-supplied signed quantities, rejecting zero and
    /// negative values. Repeated ids are summed.
    pub fn from_signed<I, S>(entries: I) -> Result<Self, RequirementError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut selection = Self::new();
        for (item_id, quantity) in entries {
            let item_id = item_id.as_ref();
            let positive = u64::try_from(quantity)
                .ok()
                .filter(|&q| q > 0)
                .ok_or_else(|| RequirementError::NonPositiveQuantity {
                    item: item_id.to_string(),
                    quantity,
                })?;
            selection.add(item_id, positive)?;
        }
        Ok(selection)
    }

    /// Add `quantity` units of `item_id`.
    pub fn add(&mut self, item_id: &str, quantity: u64) -> Result<(), RequirementError> {
        if quantity == 0 {
            return Err(RequirementError::NonPositiveQuantity {
                item: item_id.to_string(),
                quantity: 0,
            });
        }
        let entry = self.items.entry(item_id.to_string()).or_insert(0);
        *entry = entry.saturating_add(quantity);
        Ok(())
    }

    pub fn get(&self, item_id: &str) -> Option<u64> {
        self.items.get(item_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Accumulated direct requirements, keyed by item id. Never holds a zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Requirements {
    totals: BTreeMap<String, u64>,
}

impl Requirements {
    fn accumulate(&mut self, item_id: &str, quantity: u64) {
        if quantity == 0 {
            return;
        }
        let entry = self.totals.entry(item_id.to_string()).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    pub fn get(&self, item_id: &str) -> Option<u64> {
        self.totals.get(item_id).copied()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.totals.contains_key(item_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.totals.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Turn this result into the input of the next expansion round.
    pub fn into_selection(self) -> Selection {
        Selection { items: self.totals }
    }
}

impl IntoIterator for Requirements {
    type Item = (String, u64);
    type IntoIter = std::collections::btree_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.totals.into_iter()
    }
}

/// Direct requirements for `selection`, one level deep.
///
/// Unknown ids and base resources contribute nothing. Shared ingredients
/// are summed across the whole selection.
pub fn expand(catalog: &Catalog, selection: &Selection) -> Requirements {
    let mut requirements = Requirements::default();

    for (item_id, quantity) in selection.iter() {
        let Some(method) = catalog.production(item_id) else {
            continue;
        };

        for (ingredient, per_unit) in method.materials() {
            requirements.accumulate(ingredient, u64::from(*per_unit).saturating_mul(quantity));
        }

        if let ProductionMethod::Upgrade(_) = method {
            if let Some(previous) = previous_tier_id(item_id) {
                requirements.accumulate(&previous, quantity);
            }
        }
    }

    tracing::debug!(
        selected = selection.len(),
        required = requirements.len(),
        "Expanded selection"
    );
    requirements
}

/// Direct requirements for `quantity` units of a single item.
pub fn expand_one(
    catalog: &Catalog,
    item_id: &str,
    quantity: u64,
) -> Result<Requirements, RequirementError> {
    Ok(expand(catalog, &Selection::single(item_id, quantity)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemRecord;
    use crate::test_utils::*;

    #[test]
    fn recipe_scales_by_quantity() {
        let catalog = workshop_catalog();
        let req = expand_one(&catalog, "plank", 3).unwrap();
        assert_eq!(req.get("wood"), Some(6));
        assert_eq!(req.len(), 1);
    }

    #[test]
    fn expansion_is_one_level_only() {
        let catalog = workshop_catalog();
        let req = expand_one(&catalog, "table", 1).unwrap();
        assert_eq!(req.iter().collect::<Vec<_>>(), vec![("plank", 4)]);

        let next = expand(&catalog, &req.into_selection());
        assert_eq!(next.iter().collect::<Vec<_>>(), vec![("wood", 8)]);
    }

    #[test]
    fn upgrade_adds_previous_tier() {
        let catalog = armory_catalog();
        let req = expand_one(&catalog, "rifle_iii", 2).unwrap();
        assert_eq!(
            req.iter().collect::<Vec<_>>(),
            vec![("mat_a", 6), ("mat_b", 2), ("rifle_ii", 2)]
        );
    }

    #[test]
    fn upgrade_cost_shadows_recipe() {
        let catalog: Catalog = [ItemRecord::new("blade_ii")
            .with_recipe([("wood", 5)])
            .with_upgrade_cost([("metal", 1)])]
        .into_iter()
        .collect();
        let req = expand_one(&catalog, "blade_ii", 1).unwrap();
        assert_eq!(req.get("wood"), None);
        assert_eq!(req.get("metal"), Some(1));
        assert_eq!(req.get("blade_i"), Some(1));
    }

    #[test]
    fn upgrade_without_tier_suffix_adds_no_previous() {
        let catalog: Catalog = [ItemRecord::new("shield").with_upgrade_cost([("metal", 2)])]
            .into_iter()
            .collect();
        let req = expand_one(&catalog, "shield", 1).unwrap();
        assert_eq!(req.iter().collect::<Vec<_>>(), vec![("metal", 2)]);
    }

    #[test]
    fn tier_one_upgrade_adds_no_previous() {
        let catalog: Catalog = [ItemRecord::new("rifle_i").with_upgrade_cost([("metal", 2)])]
            .into_iter()
            .collect();
        let req = expand_one(&catalog, "rifle_i", 1).unwrap();
        assert_eq!(req.iter().collect::<Vec<_>>(), vec![("metal", 2)]);
    }

    #[test]
    fn recipe_item_with_tier_suffix_adds_no_previous() {
        let catalog: Catalog = [ItemRecord::new("rifle_ii").with_recipe([("wood", 1)])]
            .into_iter()
            .collect();
        let req = expand_one(&catalog, "rifle_ii", 1).unwrap();
        assert_eq!(req.iter().collect::<Vec<_>>(), vec![("wood", 1)]);
    }

    #[test]
    fn shared_ingredients_accumulate() {
        let catalog: Catalog = [
            ItemRecord::new("a").with_recipe([("wood", 2), ("nail", 1)]),
            ItemRecord::new("b").with_recipe([("wood", 2)]),
        ]
        .into_iter()
        .collect();
        let selection = Selection::from_signed([("a", 1), ("b", 1)]).unwrap();
        let req = expand(&catalog, &selection);
        assert_eq!(req.get("wood"), Some(4));
        assert_eq!(req.get("nail"), Some(1));
    }

    #[test]
    fn unknown_and_base_items_contribute_nothing() {
        let catalog = workshop_catalog();
        let selection = Selection::from_signed([("ghost", 5), ("wood", 2)]).unwrap();
        assert!(expand(&catalog, &selection).is_empty());
    }

    #[test]
    fn zero_quantity_ingredient_is_dropped() {
        let catalog: Catalog = [ItemRecord::new("kit").with_recipe([("wood", 0), ("nail", 2)])]
            .into_iter()
            .collect();
        let req = expand_one(&catalog, "kit", 1).unwrap();
        assert!(!req.contains("wood"));
        assert_eq!(req.get("nail"), Some(2));
    }

    #[test]
    fn non_positive_quantities_are_rejected() {
        let err = Selection::from_signed([("plank", 0)]).unwrap_err();
        assert_eq!(
            err,
            RequirementError::NonPositiveQuantity {
                item: "plank".to_string(),
                quantity: 0,
            }
        );
        assert!(Selection::from_signed([("plank", -3)]).is_err());
        assert!(Selection::single("plank", 0).is_err());
        assert!(format!("{err}").contains("plank"));
    }

    #[test]
    fn repeated_ids_in_selection_are_summed() {
        let selection = Selection::from_signed([("plank", 2), ("plank", 3)]).unwrap();
        assert_eq!(selection.get("plank"), Some(5));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn large_quantities_saturate() {
        let catalog: Catalog = [ItemRecord::new("crate").with_recipe([("plank", u32::MAX)])]
            .into_iter()
            .collect();
        let req = expand_one(&catalog, "crate", u64::MAX).unwrap();
        assert_eq!(req.get("plank"), Some(u64::MAX));
    }
}
