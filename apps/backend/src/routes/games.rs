//! Game-related HTTP routes.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::board::Pos;
use crate::domain::items::{tier_info, ItemInfo, Variant};
use crate::domain::state::{GameState, RejectReason, TurnOutcome};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    /// Rule set; forest when absent.
    #[serde(default)]
    pub variant: Option<Variant>,
    /// Fixed seed for reproducible games; drawn randomly when absent.
    #[serde(default)]
    pub seed: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub x: i32,
    pub y: i32,
}

/// Full game view returned by every game endpoint.
#[derive(Debug, Serialize)]
pub struct GameStateBody {
    pub id: String,
    pub variant: &'static str,
    pub grid: Vec<Vec<i8>>,
    pub score: u32,
    pub moves: u32,
    pub next_item: u8,
    pub next_item_info: ItemInfo,
    pub game_over: bool,
    pub created_at: String,
}

impl GameStateBody {
    fn from_state(state: &GameState) -> Self {
        Self {
            id: state.id.to_string(),
            variant: state.variant.as_str(),
            grid: state.board.encode(),
            score: state.score,
            moves: state.moves,
            next_item: state.next_item.value(),
            next_item_info: *tier_info(state.variant, state.next_item),
            game_over: state.game_over,
            created_at: rfc3339(state.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MoveResponse {
    pub success: bool,
    pub game_state: GameStateBody,
    /// Rejection reason; absent on accepted moves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    /// Cells cleared by merges this turn, in resolution order.
    pub merged_positions: Vec<Pos>,
}

impl MoveResponse {
    fn from_outcome(outcome: &TurnOutcome) -> Self {
        Self {
            success: outcome.accepted,
            game_state: GameStateBody::from_state(&outcome.state),
            message: outcome.rejection.map(RejectReason::message),
            merged_positions: outcome.cleared.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreBody {
    pub score: u32,
    pub moves: u32,
    pub created_at: String,
}

fn rfc3339(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_else(|_| "unknown".to_string())
}

fn parse_game_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| {
        AppError::invalid(
            ErrorCode::InvalidGameId,
            format!("'{raw}' is not a valid game id"),
        )
    })
}

/// POST /api/games
///
/// Creates a game. The body is optional; a missing or unreadable body
/// falls back to the forest variant with a random seed.
async fn create_game(
    app_state: web::Data<AppState>,
    body: Option<web::Json<CreateGameRequest>>,
) -> Result<HttpResponse, AppError> {
    let req = body.map(web::Json::into_inner).unwrap_or_default();

    let state = app_state
        .games
        .create_game(req.variant.unwrap_or_default(), req.seed)
        .await?;

    Ok(HttpResponse::Ok().json(GameStateBody::from_state(&state)))
}

/// GET /api/games/high-scores
///
/// Top finished games, best score first.
async fn high_scores(app_state: web::Data<AppState>) -> Result<web::Json<Vec<ScoreBody>>, AppError> {
    let rows = app_state.games.high_scores().await?;

    let body = rows
        .into_iter()
        .map(|row| ScoreBody {
            score: row.score,
            moves: row.moves,
            created_at: rfc3339(row.created_at),
        })
        .collect();

    Ok(web::Json(body))
}

/// GET /api/games/{game_id}
async fn get_game(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_game_id(&path)?;
    let state = app_state.games.fetch_game(id).await?;
    Ok(HttpResponse::Ok().json(GameStateBody::from_state(&state)))
}

/// POST /api/games/{game_id}/moves
///
/// Submits one placement. Illegal placements come back with
/// `success: false` and an unchanged game state, not an error status.
async fn submit_move(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<MoveRequest>,
) -> Result<HttpResponse, AppError> {
    let id = parse_game_id(&path)?;
    let req = body.into_inner();

    let outcome = app_state.games.submit_move(id, req.x, req.y).await?;
    Ok(HttpResponse::Ok().json(MoveResponse::from_outcome(&outcome)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // high-scores must register before {game_id} so it is not captured
    // as an id.
    cfg.service(web::resource("").route(web::post().to(create_game)));
    cfg.service(web::resource("/high-scores").route(web::get().to(high_scores)));
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_game)));
    cfg.service(web::resource("/{game_id}/moves").route(web::post().to(submit_move)));
}
