//! Connected-group resolution: the merge cascade.

use std::collections::VecDeque;

use super::board::{cell_index, neighbors, positions, Board, Pos, CELL_COUNT};
use super::items::{merge_scan_categories, merge_target, VariantRules};
use super::rules::{group_points, MIN_GROUP_SIZE};
use super::tile::Tile;

/// What one cascade did to the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Points gained across every resolved group.
    pub score_delta: u32,
    /// Every cleared cell, in resolution order. A coordinate can
    /// repeat when an upgraded item is itself merged by a later round.
    pub cleared: Vec<Pos>,
}

/// Resolves merges to a fixed point.
///
/// Each round walks the categories in scan order against the live
/// grid, so an upgrade produced early in a round can complete a group
/// of the next tier within the same round. Any round that resolves at
/// least one group triggers another; the loop is bounded because every
/// group strictly shrinks the item count or promotes toward the
/// capstone, which is never re-merged.
pub fn resolve_merges(board: &mut Board, rules: VariantRules) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    loop {
        let mut resolved_any = false;
        for category in merge_scan_categories() {
            for group in collect_groups(board, category) {
                resolved_any = true;
                apply_group(board, category, &group, rules, &mut outcome);
            }
        }
        if !resolved_any {
            break;
        }
    }
    outcome
}

/// Connected components of `category` with at least [`MIN_GROUP_SIZE`]
/// members. The first member of each group is the row-major-first cell
/// of its component; the rest follow in search discovery order.
fn collect_groups(board: &Board, category: Tile) -> Vec<Vec<Pos>> {
    let mut visited = [false; CELL_COUNT];
    let mut groups = Vec::new();
    for start in positions() {
        if visited[cell_index(start)] || board.get(start) != category {
            continue;
        }
        let group = flood(board, category, start, &mut visited);
        if group.len() >= MIN_GROUP_SIZE {
            groups.push(group);
        }
    }
    groups
}

fn flood(board: &Board, category: Tile, start: Pos, visited: &mut [bool; CELL_COUNT]) -> Vec<Pos> {
    let mut queue = VecDeque::from([start]);
    visited[cell_index(start)] = true;
    let mut group = Vec::new();
    while let Some(pos) = queue.pop_front() {
        group.push(pos);
        for next in neighbors(pos) {
            if !visited[cell_index(next)] && board.get(next) == category {
                visited[cell_index(next)] = true;
                queue.push_back(next);
            }
        }
    }
    group
}

fn apply_group(
    board: &mut Board,
    category: Tile,
    group: &[Pos],
    rules: VariantRules,
    outcome: &mut MergeOutcome,
) {
    outcome.score_delta += group_points(category, group.len(), rules);
    outcome.cleared.extend_from_slice(group);
    for &pos in group {
        board.set(pos, Tile::Empty);
    }
    if let Some(target) = merge_target(category) {
        board.set(group[0], target);
    }
}
