use crate::item::{DEFAULT_TYPE, ItemRecord, ProductionMethod};
use crate::tier::{self, TierInfo};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Builder for constructing an immutable [`Catalog`].
///
/// Records are keyed by id. Inserting a record whose id is already present
/// replaces the earlier one and hands it back to the caller.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    items: BTreeMap<String, ItemRecord>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. Returns the record it replaced, if any.
    pub fn insert(&mut self, record: ItemRecord) -> Option<ItemRecord> {
        self.items.insert(record.id.clone(), record)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Freeze the collected records.
    pub fn build(self) -> Catalog {
        Catalog { items: self.items }
    }
}

impl Extend<ItemRecord> for CatalogBuilder {
    fn extend<T: IntoIterator<Item = ItemRecord>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

/// Immutable item catalog. Frozen after [`CatalogBuilder::build`].
///
/// Ids that are not in the catalog are never an error: they behave as base
/// resources with default display data.
#[derive(Debug, Default)]
pub struct Catalog {
    items: BTreeMap<String, ItemRecord>,
}

impl FromIterator<ItemRecord> for Catalog {
    fn from_iter<T: IntoIterator<Item = ItemRecord>>(iter: T) -> Self {
        let mut builder = CatalogBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}

impl Catalog {
    pub fn get(&self, item_id: &str) -> Option<&ItemRecord> {
        self.items.get(item_id)
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.items.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ItemRecord> {
        self.items.values()
    }

    /// The effective production mechanism for `item_id`.
    pub fn production(&self, item_id: &str) -> Option<ProductionMethod<'_>> {
        self.get(item_id).and_then(ItemRecord::production)
    }

    /// True if `item_id` cannot be expanded: unknown, or known with neither
    /// a non-empty recipe nor a non-empty upgrade cost.
    pub fn is_base_resource(&self, item_id: &str) -> bool {
        self.production(item_id).is_none()
    }

    /// The type tag for `item_id`, defaulted for unknown ids.
    pub fn item_type<'a>(&'a self, item_id: &str) -> &'a str {
        self.get(item_id).map_or(DEFAULT_TYPE, ItemRecord::item_type)
    }

    /// Tier metadata for `item_id`, honouring the Modification exclusion.
    pub fn tier_info<'a>(&self, item_id: &'a str) -> TierInfo<'a> {
        let eligible = self.get(item_id).is_none_or(ItemRecord::is_weapon_eligible);
        tier::tier_info(item_id, eligible)
    }
}

/// Shared handle to the current catalog.
///
/// Readers take a [`snapshot`](Self::snapshot) and work against it for the
/// whole request. [`replace`](Self::replace) swaps in a new catalog without
/// touching snapshots already handed out.
#[derive(Debug, Clone, Default)]
pub struct CatalogHandle {
    current: Arc<RwLock<Arc<Catalog>>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in `catalog`. Returns the catalog it replaced.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let items = catalog.len();
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        tracing::info!(items, previous_items = previous.len(), "Catalog replaced");
        previous
    }
}

impl From<Catalog> for CatalogHandle {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
