//! Domain layer: pure game rules with no I/O.
//!
//! Everything here is synchronous and deterministic given the injected
//! randomness; persistence and transport live elsewhere.

pub mod board;
pub mod generator;
pub mod items;
pub mod merge;
pub mod raiders;
pub mod rng;
pub mod rules;
pub mod state;
pub mod tile;
pub mod turn;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props;
#[cfg(test)]
mod tests_raiders;
#[cfg(test)]
mod tests_turn;

// Re-exports for ergonomics
pub use board::{neighbors, positions, Board, Pos, GRID_SIZE};
pub use items::{merge_target, tier_info, tile_info, ItemInfo, Variant};
pub use merge::{resolve_merges, MergeOutcome};
pub use rng::{derive_turn_seed, SeededTurnRng, TurnRng};
pub use rules::raider_spawn_chance;
pub use state::{GameState, RejectReason, TurnOutcome};
pub use tile::{Tier, Tile};
pub use turn::{evaluate_turn, new_game};
