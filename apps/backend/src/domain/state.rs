//! Game state carried between turns.

use time::OffsetDateTime;
use uuid::Uuid;

use super::board::{Board, Pos};
use super::items::Variant;
use super::tile::Tier;

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Stable identifier minted at creation.
    pub id: Uuid,
    /// Item-set flavor chosen at creation; fixed for the game's life.
    pub variant: Variant,
    /// Current grid.
    pub board: Board,
    /// Cumulative score.
    pub score: u32,
    /// Accepted moves so far.
    pub moves: u32,
    /// Tier the next accepted placement will produce.
    pub next_item: Tier,
    /// Set once no empty cell remains; never cleared.
    pub game_over: bool,
    /// Seed all per-turn randomness derives from.
    pub rng_seed: i64,
    /// Creation timestamp, UTC.
    pub created_at: OffsetDateTime,
}

/// Why a move was refused. Refusals are part of normal play, not
/// errors: the caller gets the untouched state back alongside one of
/// these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The game already reached its terminal state.
    GameOver,
    /// Coordinates fall outside the grid.
    OutOfBounds,
    /// The target cell is occupied.
    Occupied,
}

impl RejectReason {
    /// Client-facing reason string; stable wire contract.
    pub const fn message(self) -> &'static str {
        match self {
            RejectReason::GameOver => "game is over",
            RejectReason::OutOfBounds => "invalid position",
            RejectReason::Occupied => "tile is not empty",
        }
    }
}

/// Result of evaluating one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Whether the move was applied.
    pub accepted: bool,
    /// State after the turn; identical to the input when rejected.
    pub state: GameState,
    /// Refusal reason when `accepted` is false.
    pub rejection: Option<RejectReason>,
    /// Cells cleared by merges this turn, in resolution order.
    pub cleared: Vec<Pos>,
}

impl TurnOutcome {
    /// Outcome of a refused move: state handed back untouched.
    pub fn rejected(state: GameState, reason: RejectReason) -> Self {
        Self {
            accepted: false,
            state,
            rejection: Some(reason),
            cleared: Vec::new(),
        }
    }
}
