//! Tuning constants and score arithmetic for the turn pipeline.

use super::items::VariantRules;
use super::tile::Tile;

/// Smallest connected group that resolves as a merge.
pub const MIN_GROUP_SIZE: usize = 3;

/// Percent chance that a raider spawns in place of the pending item.
///
/// Zero for the first ten moves, then climbing five points every ten
/// moves up to a 40 percent ceiling.
pub fn raider_spawn_chance(moves: u32) -> u32 {
    if moves < 10 {
        return 0;
    }
    (15 + 5 * (moves / 10)).min(40)
}

/// Points awarded for clearing one cell of `category`.
pub fn cell_points(category: Tile) -> u32 {
    match category {
        Tile::Item(tier) => (u32::from(tier.value()) + 1) * 10,
        Tile::Debris => 5,
        _ => 0,
    }
}

/// Total points for one resolved group. Oversized groups score half
/// again, truncated, under variants with the big-group bonus.
pub fn group_points(category: Tile, size: usize, rules: VariantRules) -> u32 {
    let base = cell_points(category) * size as u32;
    if rules.big_group_bonus && size > MIN_GROUP_SIZE {
        base * 3 / 2
    } else {
        base
    }
}
