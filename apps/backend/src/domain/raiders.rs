//! Raider movement, run after merges settle.

use super::board::{neighbors, positions, Board, Pos};
use super::rng::TurnRng;
use super::tile::Tile;

/// Moves every raider one step, trapping the ones with nowhere to go.
///
/// Raiders are enumerated from a snapshot taken before any of them
/// move, then handled in row-major order against the live grid: a
/// raider may step into a cell an earlier raider vacated this turn,
/// but never onto one still occupied. A raider with no empty
/// orthogonal neighbor collapses into debris where it stands.
pub fn advance_raiders(board: &mut Board, rng: &mut dyn TurnRng) {
    let snapshot: Vec<Pos> = positions()
        .filter(|&pos| board.get(pos) == Tile::Raider)
        .collect();
    for pos in snapshot {
        let open: Vec<Pos> = neighbors(pos)
            .filter(|&next| board.get(next) == Tile::Empty)
            .collect();
        if open.is_empty() {
            board.set(pos, Tile::Debris);
        } else {
            let step = open[rng.uniform(open.len() as u32) as usize];
            board.set(pos, Tile::Empty);
            board.set(step, Tile::Raider);
        }
    }
}
