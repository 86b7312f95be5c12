//! Game store seam for the service layer.

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::state::GameState;
use crate::errors::domain::DomainError;

/// One row of the rankings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub score: u32,
    pub moves: u32,
    pub created_at: OffsetDateTime,
}

/// Persistence seam for game sessions.
///
/// `save` is a full-state write. The service layer serializes turns per
/// game, so an implementation never sees interleaved writes for one id.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Persist a freshly created game.
    async fn create(&self, state: &GameState) -> Result<(), DomainError>;

    /// Fetch a game by id, `None` when unknown.
    async fn load(&self, id: Uuid) -> Result<Option<GameState>, DomainError>;

    /// Write back the state after an accepted turn.
    async fn save(&self, state: &GameState) -> Result<(), DomainError>;

    /// Best terminal games, highest score first.
    async fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRow>, DomainError>;
}
