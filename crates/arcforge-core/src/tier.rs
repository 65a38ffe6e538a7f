//! Weapon upgrade tiers.
//!
//! A weapon's tier is encoded in its id: `rifle_i`, `rifle_ii`, `rifle_iii`,
//! `rifle_iv`. Tiers form a strict chain I -> II -> III -> IV, and upgrading
//! to tier N consumes one unit of tier N-1 of the same base weapon.
//!
//! All suffix handling lives here so callers only ever see [`Tier`] and
//! [`TierInfo`].

use serde::{Deserialize, Serialize};

use crate::item::MODIFICATION_TYPE;

/// One of the four upgrade levels. Serializes as its Roman numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    I,
    II,
    III,
    IV,
}

/// Suffixes checked longest first.
const SUFFIXES: [(&str, Tier); 4] = [
    ("_iv", Tier::IV),
    ("_iii", Tier::III),
    ("_ii", Tier::II),
    ("_i", Tier::I),
];

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::I, Tier::II, Tier::III, Tier::IV];

    pub fn numeral(self) -> &'static str {
        match self {
            Tier::I => "I",
            Tier::II => "II",
            Tier::III => "III",
            Tier::IV => "IV",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Tier::I => "_i",
            Tier::II => "_ii",
            Tier::III => "_iii",
            Tier::IV => "_iv",
        }
    }

    /// The tier a player must already own to upgrade into this one.
    pub fn previous(self) -> Option<Tier> {
        match self {
            Tier::I => None,
            Tier::II => Some(Tier::I),
            Tier::III => Some(Tier::II),
            Tier::IV => Some(Tier::III),
        }
    }

    /// Split an id into its base id and tier, if it carries a tier suffix.
    pub fn parse_id(item_id: &str) -> Option<(&str, Tier)> {
        SUFFIXES.iter().find_map(|&(suffix, tier)| {
            item_id.strip_suffix(suffix).map(|base| (base, tier))
        })
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.numeral())
    }
}

/// Tier metadata derived from an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierInfo<'a> {
    NotATier,
    Tier {
        /// The id with its tier suffix stripped.
        base_id: &'a str,
        tier: Tier,
        /// `None` for tier I.
        required: Option<Tier>,
    },
}

impl<'a> TierInfo<'a> {
    pub fn is_tier(&self) -> bool {
        matches!(self, TierInfo::Tier { .. })
    }

    pub fn base_id(&self) -> Option<&'a str> {
        match self {
            TierInfo::Tier { base_id, .. } => Some(*base_id),
            TierInfo::NotATier => None,
        }
    }

    pub fn tier(&self) -> Option<Tier> {
        match self {
            TierInfo::Tier { tier, .. } => Some(*tier),
            TierInfo::NotATier => None,
        }
    }

    pub fn required(&self) -> Option<Tier> {
        match self {
            TierInfo::Tier { required, .. } => *required,
            TierInfo::NotATier => None,
        }
    }
}

/// Whether an item of this type may be a weapon upgrade tier.
pub fn is_weapon_eligible(item_type: &str) -> bool {
    item_type != MODIFICATION_TYPE
}

/// The id of the tier directly below `item_id`, e.g. `rifle_iv` -> `rifle_iii`.
///
/// Tier I ids and ids without a tier suffix have no previous tier.
pub fn previous_tier_id(item_id: &str) -> Option<String> {
    let (base, tier) = Tier::parse_id(item_id)?;
    let previous = tier.previous()?;
    Some(format!("{base}{}", previous.suffix()))
}

/// Tier metadata for `item_id`. Ineligible items are never tiers.
pub fn tier_info(item_id: &str, weapon_eligible: bool) -> TierInfo<'_> {
    if !weapon_eligible {
        return TierInfo::NotATier;
    }
    match Tier::parse_id(item_id) {
        Some((base_id, tier)) => TierInfo::Tier {
            base_id,
            tier,
            required: tier.previous(),
        },
        None => TierInfo::NotATier,
    }
}
