//! Item taxonomy: variants, display metadata, and merge targets.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tile::{Tier, Tile};

/// Item-set flavor, fixed at game creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Forest,
    Tavern,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Forest => "forest",
            Variant::Tavern => "tavern",
        }
    }

    pub fn rules(&self) -> VariantRules {
        match self {
            Variant::Forest => VariantRules {
                big_group_bonus: false,
            },
            Variant::Tavern => VariantRules {
                big_group_bonus: true,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring knobs that differ between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantRules {
    /// Groups larger than three score half again, truncated.
    pub big_group_bonus: bool,
}

/// Display metadata for one tier, passed through to clients untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemInfo {
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
}

const fn info(name: &'static str, glyph: &'static str, color: &'static str) -> ItemInfo {
    ItemInfo { name, glyph, color }
}

const FOREST_TIERS: [ItemInfo; 8] = [
    info("grass", "\u{1f331}", "#4ade80"),
    info("bush", "\u{1f33f}", "#22c55e"),
    info("tree", "\u{1f333}", "#16a34a"),
    info("house", "\u{1f3e0}", "#dc2626"),
    info("mansion", "\u{1f3db}\u{fe0f}", "#7c2d12"),
    info("castle", "\u{1f3f0}", "#7c3aed"),
    info("crystal", "\u{1f48e}", "#06b6d4"),
    info("monument", "\u{1f5ff}", "#fbbf24"),
];

const TAVERN_TIERS: [ItemInfo; 8] = [
    info("bottle", "\u{1f37e}", "#f59e0b"),
    info("pint", "\u{1f95b}", "#fbbf24"),
    info("keg", "\u{1f6e2}\u{fe0f}", "#eab308"),
    info("pub", "\u{1f37b}", "#ca8a04"),
    info("brewery", "\u{1f3ed}", "#a16207"),
    info("factory", "\u{1f3ed}", "#854d0e"),
    info("empire", "\u{1f306}", "#713f12"),
    info("monument", "\u{1f5fd}", "#4d2c0e"),
];

// Raider, debris, boulder. Same order in both tables.
const FOREST_SPECIALS: [ItemInfo; 3] = [
    info("bear", "\u{1f43b}", "#92400e"),
    info("tombstone", "\u{1faa6}", "#6b7280"),
    info("rock", "\u{1faa8}", "#374151"),
];

const TAVERN_SPECIALS: [ItemInfo; 3] = [
    info("thief", "\u{1f575}\u{fe0f}", "#92400e"),
    info("trap", "\u{1faa4}", "#6b7280"),
    info("obstacle", "\u{1f6a7}", "#374151"),
];

/// Display metadata for a tier under the given variant. The tables are
/// static and opaque to the rest of the engine.
pub fn tier_info(variant: Variant, tier: Tier) -> &'static ItemInfo {
    let table = match variant {
        Variant::Forest => &FOREST_TIERS,
        Variant::Tavern => &TAVERN_TIERS,
    };
    &table[tier.value() as usize]
}

/// Display metadata for any occupied tile, `None` for empty cells.
pub fn tile_info(variant: Variant, tile: Tile) -> Option<&'static ItemInfo> {
    let specials = match variant {
        Variant::Forest => &FOREST_SPECIALS,
        Variant::Tavern => &TAVERN_SPECIALS,
    };
    match tile {
        Tile::Item(tier) => Some(tier_info(variant, tier)),
        Tile::Raider => Some(&specials[0]),
        Tile::Debris => Some(&specials[1]),
        Tile::Boulder => Some(&specials[2]),
        Tile::Empty => None,
    }
}

/// Categories searched for merge groups, in resolution order: tiers
/// ascending, debris last. The capstone tier is absent on purpose.
pub(crate) fn merge_scan_categories() -> [Tile; 8] {
    [
        Tile::Item(Tier::ALL[0]),
        Tile::Item(Tier::ALL[1]),
        Tile::Item(Tier::ALL[2]),
        Tile::Item(Tier::ALL[3]),
        Tile::Item(Tier::ALL[4]),
        Tile::Item(Tier::ALL[5]),
        Tile::Item(Tier::ALL[6]),
        Tile::Debris,
    ]
}

/// Upgrade produced when a group of `category` merges, `None` for
/// categories that never merge.
pub fn merge_target(category: Tile) -> Option<Tile> {
    match category {
        Tile::Item(tier) if tier != Tier::CAP => Some(Tile::Item(tier.promoted())),
        Tile::Debris => Some(Tile::Item(Tier::BASE)),
        _ => None,
    }
}
