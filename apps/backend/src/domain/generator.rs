//! Pending-item generation.

use super::rng::TurnRng;
use super::tile::Tier;

const EARLY_WEIGHTS: [u32; 2] = [80, 20];
const MID_WEIGHTS: [u32; 3] = [60, 35, 5];
const LATE_WEIGHTS: [u32; 3] = [50, 40, 10];

/// Draws the tier offered for the next placement.
///
/// The first five moves always offer the base tier and consume no
/// randomness; later stages widen the pool as the move count grows.
pub fn next_item(moves: u32, rng: &mut dyn TurnRng) -> Tier {
    if moves < 5 {
        return Tier::BASE;
    }
    let weights: &[u32] = if moves < 15 {
        &EARLY_WEIGHTS
    } else if moves < 30 {
        &MID_WEIGHTS
    } else {
        &LATE_WEIGHTS
    };
    Tier::ALL[rng.weighted(weights)]
}
