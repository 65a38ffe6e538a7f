//! Arcforge Core -- crafting requirement resolution over an item catalog.
//!
//! This crate answers one question: "what do I need to make these items?"
//! It works one level at a time. Callers that want a full bill of materials
//! feed each answer back in until only base resources remain.
//!
//! # Lifecycle
//!
//! The [`catalog::Catalog`] is built once from item records and is read-only
//! afterwards. Updates go through [`catalog::CatalogHandle::replace`], which
//! swaps in a freshly built catalog; existing snapshots stay valid.
//!
//! ```rust,ignore
//! let mut builder = CatalogBuilder::new();
//! builder.insert(ItemRecord::new("plank").with_recipe([("wood", 2)]));
//! let catalog = builder.build();
//!
//! let selection = Selection::single("plank", 3)?;
//! let needed = requirements::expand(&catalog, &selection);
//! assert_eq!(needed.get("wood"), Some(6));
//! ```
//!
//! # Key Types
//!
//! - [`item::ItemRecord`] -- One catalog entry: name, type, rarity, image,
//!   and at most one effective production mechanism.
//! - [`catalog::Catalog`] -- Immutable id-keyed item map plus the base
//!   resource classifier.
//! - [`tier`] -- Weapon upgrade tiers (I-IV) derived from id suffixes.
//! - [`requirements`] -- One-level expansion of a [`requirements::Selection`]
//!   into [`requirements::Requirements`].
//! - [`display`] -- Presentation-ready [`display::DisplayRecord`]s.

pub mod catalog;
pub mod display;
pub mod item;
pub mod requirements;
pub mod tier;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use catalog::{Catalog, CatalogBuilder, CatalogHandle};
pub use display::{DisplayConfig, DisplayRecord, UpgradeOverlay};
pub use item::{ItemName, ItemRecord, Materials, ProductionMethod};
pub use requirements::{Requirements, RequirementError, Selection};
pub use tier::{Tier, TierInfo};
