//! SeaORM-backed game store.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::adapters::games_sea::{self, GameCreate, GameUpdate};
use crate::domain::board::Board;
use crate::domain::state::GameState;
use crate::domain::tile::Tier;
use crate::entities::games;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;
use crate::repos::games::{GameStore, ScoreRow};

/// Store backed by the `games` table, one row per session. The grid is
/// persisted as JSON text in the row.
#[derive(Clone)]
pub struct SeaGameStore {
    conn: DatabaseConnection,
}

impl SeaGameStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

fn encode_grid(state: &GameState) -> Result<String, DomainError> {
    serde_json::to_string(&state.board.encode()).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("grid serialization failed: {e}"),
        )
    })
}

fn read_count(value: i64, field: &str) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("{field} {value} out of range"),
        )
    })
}

fn decode_state(model: games::Model) -> Result<GameState, DomainError> {
    let codes: Vec<Vec<i8>> = serde_json::from_str(&model.grid).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("corrupt grid payload: {e}"),
        )
    })?;
    let board = Board::decode(&codes)?;

    let next_item = u8::try_from(model.next_item)
        .ok()
        .and_then(Tier::new)
        .ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("next_item {} out of range", model.next_item),
            )
        })?;

    Ok(GameState {
        id: model.id,
        variant: model.variant.into(),
        board,
        score: read_count(model.score, "score")?,
        moves: read_count(i64::from(model.moves), "moves")?,
        next_item,
        game_over: model.game_over,
        rng_seed: model.rng_seed,
        created_at: model.created_at,
    })
}

#[async_trait]
impl GameStore for SeaGameStore {
    async fn create(&self, state: &GameState) -> Result<(), DomainError> {
        let dto = GameCreate {
            id: state.id,
            variant: state.variant.into(),
            grid: encode_grid(state)?,
            score: i64::from(state.score),
            moves: state.moves as i32,
            next_item: i16::from(state.next_item.value()),
            game_over: state.game_over,
            rng_seed: state.rng_seed,
            created_at: state.created_at,
        };

        games_sea::create_game(&self.conn, dto)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn load(&self, id: Uuid) -> Result<Option<GameState>, DomainError> {
        let model = games_sea::find_by_id(&self.conn, id)
            .await
            .map_err(map_db_err)?;
        model.map(decode_state).transpose()
    }

    async fn save(&self, state: &GameState) -> Result<(), DomainError> {
        let dto = GameUpdate {
            id: state.id,
            grid: encode_grid(state)?,
            score: i64::from(state.score),
            moves: state.moves as i32,
            next_item: i16::from(state.next_item.value()),
            game_over: state.game_over,
        };

        games_sea::update_game(&self.conn, dto)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }

    async fn top_scores(&self, limit: usize) -> Result<Vec<ScoreRow>, DomainError> {
        let models = games_sea::top_scores(&self.conn, limit as u64)
            .await
            .map_err(map_db_err)?;

        models
            .into_iter()
            .map(|model| {
                Ok(ScoreRow {
                    score: read_count(model.score, "score")?,
                    moves: read_count(i64::from(model.moves), "moves")?,
                    created_at: model.created_at,
                })
            })
            .collect()
    }
}
