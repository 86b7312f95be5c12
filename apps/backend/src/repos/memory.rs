//! In-memory game store.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::state::GameState;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::{GameStore, ScoreRow};

/// Process-local store backed by a concurrent map.
///
/// Games vanish on restart. This is the default store for local play and
/// the one the HTTP tests run against.
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: DashMap<Uuid, GameState>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn create(&self, state: &GameState) -> Result<(), DomainError> {
        self.games.insert(state.id, state.clone());
        Ok(())
    }

    async fn load(&self, id: Uuid) -> Result<Option<GameState>, DomainError> {
        Ok(self.games.get(&id).map(|entry| entry.clone()))
    }

    async fn save(&self, state: &GameState) -> Result<(), DomainError> {
        match self.games.get_mut(&state.id) {
            Some(mut entry) => {
                *entry = state.clone();
                Ok(())
            }
            None => Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {} not found", state.id),
            )),
        }
    }

    async fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRow>, DomainError> {
        let mut rows: Vec<ScoreRow> = self
            .games
            .iter()
            .filter(|entry| entry.game_over)
            .map(|entry| ScoreRow {
                score: entry.score,
                moves: entry.moves,
                created_at: entry.created_at,
            })
            .collect();
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        rows.truncate(limit);
        Ok(rows)
    }
}
