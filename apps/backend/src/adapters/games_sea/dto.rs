//! DTOs for games_sea adapter.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::entities::games::GameVariant;

/// Full initial row for a freshly created game.
#[derive(Debug, Clone)]
pub struct GameCreate {
    pub id: Uuid,
    pub variant: GameVariant,
    pub grid: String,
    pub score: i64,
    pub moves: i32,
    pub next_item: i16,
    pub game_over: bool,
    pub rng_seed: i64,
    pub created_at: OffsetDateTime,
}

/// Columns a resolved turn writes back. The variant, seed, and creation
/// time never change after insert.
#[derive(Debug, Clone)]
pub struct GameUpdate {
    pub id: Uuid,
    pub grid: String,
    pub score: i64,
    pub moves: i32,
    pub next_item: i16,
    pub game_over: bool,
}
