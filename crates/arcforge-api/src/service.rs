use arcforge_core::catalog::{Catalog, CatalogHandle};
use arcforge_core::display::{self, DisplayConfig, DisplayRecord};
use arcforge_core::requirements::{self, Requirements, Selection};
use std::sync::Arc;

use crate::error::ApiError;
use crate::types::{
    CalculateRequest, ExpandRequest, InfoRequest, ListedItem, RequirementLine, by_name,
};

/// Serves requests against the current catalog.
///
/// Each request works on one catalog snapshot, so a concurrent
/// [`reload`](Self::reload) never mixes two catalogs into one answer.
#[derive(Debug, Clone)]
pub struct Calculator {
    catalog: CatalogHandle,
    display: DisplayConfig,
}

impl Calculator {
    pub fn new(catalog: impl Into<CatalogHandle>, display: DisplayConfig) -> Self {
        Self {
            catalog: catalog.into(),
            display,
        }
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.snapshot()
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }

    /// Swap in a freshly loaded catalog.
    pub fn reload(&self, catalog: Catalog) {
        self.catalog.replace(catalog);
    }

    /// Items worth offering for selection: anything with a recipe or upgrade
    /// cost, plus every weapon tier.
    pub fn list_items(&self) -> Vec<ListedItem> {
        let catalog = self.catalog.snapshot();
        let mut items: Vec<ListedItem> = catalog
            .iter()
            .filter(|record| {
                record.production().is_some() || catalog.tier_info(&record.id).is_tier()
            })
            .map(|record| ListedItem {
                info: display::item_info(&catalog, &self.display, &record.id),
                has_recipe: record.has_recipe(),
            })
            .collect();
        items.sort_by(|a, b| by_name(&a.info, &b.info));
        items
    }

    pub fn calculate(&self, request: &CalculateRequest) -> Result<Vec<RequirementLine>, ApiError> {
        let selection = Selection::from_signed(request.items.iter().map(|(id, qty)| (id, *qty)))?;
        let catalog = self.catalog.snapshot();
        let requirements = requirements::expand(&catalog, &selection);
        Ok(self.lines(&catalog, requirements))
    }

    pub fn expand(&self, request: &ExpandRequest) -> Result<Vec<RequirementLine>, ApiError> {
        let item_id = request
            .item_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(ApiError::MissingField("item_id"))?;
        let quantity = request.quantity.unwrap_or(1);

        let selection = Selection::from_signed([(item_id, quantity)])?;
        let catalog = self.catalog.snapshot();
        let requirements = requirements::expand(&catalog, &selection);
        Ok(self.lines(&catalog, requirements))
    }

    pub fn item_info(&self, request: &InfoRequest) -> Result<DisplayRecord, ApiError> {
        let item_id = request
            .item_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(ApiError::MissingField("item_id"))?;
        Ok(display::item_info(&self.catalog.snapshot(), &self.display, item_id))
    }

    fn lines(&self, catalog: &Catalog, requirements: Requirements) -> Vec<RequirementLine> {
        let mut lines: Vec<RequirementLine> = requirements
            .iter()
            .map(|(item_id, quantity)| RequirementLine {
                info: display::item_info(catalog, &self.display, item_id),
                quantity,
                can_expand: !catalog.is_base_resource(item_id),
            })
            .collect();
        lines.sort_by(|a, b| by_name(&a.info, &b.info));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcforge_core::test_utils::*;
    use arcforge_core::tier::Tier;
    use std::collections::BTreeMap;

    fn calculator() -> Calculator {
        Calculator::new(full_catalog(), DisplayConfig::default())
    }

    fn ids(lines: &[RequirementLine]) -> Vec<&str> {
        lines.iter().map(|l| l.info.id.as_str()).collect()
    }

    #[test]
    fn list_skips_base_resources() {
        let listed = calculator().list_items();
        let listed_ids: Vec<&str> = listed.iter().map(|i| i.info.id.as_str()).collect();
        assert!(!listed_ids.contains(&"wood"));
        assert!(!listed_ids.contains(&"mat_a"));
        assert!(listed_ids.contains(&"plank"));
        assert!(listed_ids.contains(&"rifle_iv"));
        assert!(listed_ids.contains(&"scope_ii"));
    }

    #[test]
    fn list_includes_weapon_tiers_without_production() {
        let catalog: Catalog = [arcforge_core::ItemRecord::new("pistol_i").with_type("Weapon")]
            .into_iter()
            .collect();
        let listed = Calculator::new(catalog, DisplayConfig::default()).list_items();
        assert_eq!(listed.len(), 1);
        assert!(!listed[0].has_recipe);
    }

    #[test]
    fn upgrade_only_tiers_list_without_recipe() {
        let listed = calculator().list_items();
        let flag = |id: &str| {
            listed
                .iter()
                .find(|i| i.info.id == id)
                .map(|i| i.has_recipe)
        };
        assert_eq!(flag("rifle_i"), Some(true));
        assert_eq!(flag("rifle_ii"), Some(false));
        assert_eq!(flag("rifle_iv"), Some(false));
        assert_eq!(flag("plank"), Some(true));
    }

    #[test]
    fn list_is_sorted_case_insensitively() {
        let catalog: Catalog = [
            arcforge_core::ItemRecord::new("b").with_name("beta").with_recipe([("x", 1)]),
            arcforge_core::ItemRecord::new("a").with_name("Alpha").with_recipe([("x", 1)]),
            arcforge_core::ItemRecord::new("c").with_name("Gamma").with_recipe([("x", 1)]),
        ]
        .into_iter()
        .collect();
        let listed = Calculator::new(catalog, DisplayConfig::default()).list_items();
        let names: Vec<&str> = listed.iter().map(|i| i.info.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn calculate_returns_display_lines() {
        let request = CalculateRequest {
            items: BTreeMap::from([("rifle_iii".to_string(), 2), ("table".to_string(), 1)]),
        };
        let lines = calculator().calculate(&request).unwrap();
        // Names: Mechanical Components, Metal Parts, Plank, Rifle II
        assert_eq!(ids(&lines), vec!["mat_b", "mat_a", "plank", "rifle_ii"]);

        let rifle = &lines[3];
        assert_eq!(rifle.quantity, 2);
        assert!(rifle.can_expand);
        assert_eq!(rifle.info.image, "static/images/rifle.png");
        assert_eq!(rifle.info.upgrade.map(|o| o.required_level), Some(Tier::I));

        let metal = &lines[1];
        assert_eq!(metal.quantity, 6);
        assert!(!metal.can_expand);
    }

    #[test]
    fn calculate_rejects_non_positive_quantity() {
        let request = CalculateRequest {
            items: BTreeMap::from([("plank".to_string(), 0)]),
        };
        assert!(matches!(
            calculator().calculate(&request),
            Err(ApiError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn calculate_empty_selection_is_empty() {
        let lines = calculator().calculate(&CalculateRequest::default()).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn expand_defaults_quantity_to_one() {
        let request = ExpandRequest {
            item_id: Some("plank".to_string()),
            quantity: None,
        };
        let lines = calculator().expand(&request).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].info.id, "wood");
        assert_eq!(lines[0].quantity, 2);
        assert!(!lines[0].can_expand);
    }

    #[test]
    fn expand_requires_item_id() {
        let calc = calculator();
        assert!(matches!(
            calc.expand(&ExpandRequest::default()),
            Err(ApiError::MissingField("item_id"))
        ));
        let empty = ExpandRequest {
            item_id: Some(String::new()),
            quantity: Some(1),
        };
        assert!(matches!(calc.expand(&empty), Err(ApiError::MissingField(_))));
    }

    #[test]
    fn expand_unknown_item_is_empty_not_error() {
        let lines = calculator().expand(&ExpandRequest::new("ghost", 3)).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn item_info_for_unknown_id() {
        let info = calculator()
            .item_info(&InfoRequest {
                item_id: Some("ghost".to_string()),
            })
            .unwrap();
        assert_eq!(info.name, "ghost");
        assert!(calculator().item_info(&InfoRequest::default()).is_err());
    }

    #[test]
    fn reload_changes_answers() {
        let calc = calculator();
        assert_eq!(calc.expand(&ExpandRequest::new("plank", 1)).unwrap().len(), 1);

        calc.reload(Catalog::default());
        assert!(calc.catalog().is_empty());
        assert!(calc.expand(&ExpandRequest::new("plank", 1)).unwrap().is_empty());
    }
}
