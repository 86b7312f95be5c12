//! Game lifecycle orchestration: creation, turn submission, rankings.

use std::sync::Arc;

use dashmap::DashMap;
use rand::Rng;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::domain::items::Variant;
use crate::domain::rng::SeededTurnRng;
use crate::domain::state::{GameState, TurnOutcome};
use crate::domain::turn;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::games::{GameStore, ScoreRow};

/// Rows returned by the rankings endpoint.
const HIGH_SCORE_LIMIT: usize = 10;

/// Game service over a pluggable store.
///
/// Turns for one game are serialized through a per-game async mutex, so
/// two concurrent moves cannot both resolve against the same state.
#[derive(Clone)]
pub struct GameService {
    store: Arc<dyn GameStore>,
    turn_locks: Arc<DashMap<Uuid, Arc<Mutex<()>>>>,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self {
            store,
            turn_locks: Arc::new(DashMap::new()),
        }
    }

    /// Create a game and persist its opening state.
    ///
    /// When no seed is supplied one is drawn from the OS, so replays stay
    /// possible for every game.
    pub async fn create_game(
        &self,
        variant: Variant,
        seed: Option<i64>,
    ) -> Result<GameState, DomainError> {
        let id = Uuid::new_v4();
        let rng_seed = seed.unwrap_or_else(|| rand::rng().random());
        let created_at = OffsetDateTime::now_utc();

        let mut rng = SeededTurnRng::for_turn(rng_seed, 0);
        let state = turn::new_game(id, variant, rng_seed, created_at, &mut rng);

        self.store.create(&state).await?;
        info!(game_id = %id, variant = %variant, "game created");
        Ok(state)
    }

    /// Fetch a game or fail with not-found.
    pub async fn fetch_game(&self, id: Uuid) -> Result<GameState, DomainError> {
        self.store
            .load(id)
            .await?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found")))
    }

    /// Resolve one move. Rejected moves leave the stored state untouched.
    pub async fn submit_move(&self, id: Uuid, x: i32, y: i32) -> Result<TurnOutcome, DomainError> {
        let lock = Arc::clone(&*self.turn_locks.entry(id).or_default());
        let guard = lock.lock().await;

        let state = self.fetch_game(id).await?;

        let outcome = {
            let mut rng = SeededTurnRng::for_turn(state.rng_seed, state.moves);
            turn::evaluate_turn(&state, x, y, &mut rng)
        };

        if outcome.accepted {
            self.store.save(&outcome.state).await?;
            if outcome.state.game_over {
                info!(
                    game_id = %id,
                    score = outcome.state.score,
                    moves = outcome.state.moves,
                    "game finished"
                );
            }
        }

        drop(guard);
        if outcome.state.game_over {
            // Terminal games take no further turns; drop the lock entry.
            self.turn_locks.remove(&id);
        }

        Ok(outcome)
    }

    /// Best terminal games for the rankings table.
    pub async fn high_scores(&self) -> Result<Vec<ScoreRow>, DomainError> {
        self.store.top_scores(HIGH_SCORE_LIMIT).await
    }
}
