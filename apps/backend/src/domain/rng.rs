//! Injected randomness for turn evaluation.
//!
//! Every accepted move draws from a stream derived from the game's
//! stored seed and the move counter, so evaluating the same move
//! against the same state always lands the same way.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Randomness consumed while evaluating a single turn.
pub trait TurnRng: Send {
    /// Uniform draw in `[0, bound)`.
    fn uniform(&mut self, bound: u32) -> u32;

    /// Index into `weights`, drawn proportionally to each entry.
    fn weighted(&mut self, weights: &[u32]) -> usize;
}

/// Stream seed for one turn of one game.
///
/// Wrapping arithmetic keeps extreme stored seeds well-defined; the
/// move multiplier separates consecutive turns of the same game.
pub fn derive_turn_seed(game_seed: i64, move_no: u32) -> u64 {
    (game_seed as u64)
        .wrapping_add(u64::from(move_no).wrapping_mul(1_000_000))
        .wrapping_add(1)
}

/// ChaCha-backed [`TurnRng`], seeded per turn.
pub struct SeededTurnRng {
    rng: ChaCha8Rng,
}

impl SeededTurnRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Rng positioned for the turn numbered `move_no` of a game.
    pub fn for_turn(game_seed: i64, move_no: u32) -> Self {
        Self::new(derive_turn_seed(game_seed, move_no))
    }
}

impl TurnRng for SeededTurnRng {
    fn uniform(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0, "uniform bound must be positive");
        self.rng.random_range(0..bound)
    }

    fn weighted(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        debug_assert!(total > 0, "weights must not all be zero");
        let mut roll = self.rng.random_range(0..total);
        for (index, &weight) in weights.iter().enumerate() {
            if roll < weight {
                return index;
            }
            roll -= weight;
        }
        weights.len() - 1
    }
}

/// Test double replaying a fixed list of draws: `uniform` pops the
/// next value modulo the bound, `weighted` pops the next value as the
/// chosen index.
#[cfg(test)]
pub struct ScriptedRng {
    draws: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(draws: &[u32]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl TurnRng for ScriptedRng {
    fn uniform(&mut self, bound: u32) -> u32 {
        self.draws.pop_front().unwrap_or(0) % bound.max(1)
    }

    fn weighted(&mut self, weights: &[u32]) -> usize {
        (self.draws.pop_front().unwrap_or(0) as usize).min(weights.len().saturating_sub(1))
    }
}
