//! SeaORM adapter for game persistence - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::games;

pub mod dto;

pub use dto::{GameCreate, GameUpdate};

// Adapter functions return DbErr; the repos layer maps to DomainError.

/// Helper: apply an update to one game, then refetch the row.
///
/// This consolidates the repetitive pattern:
/// - Adds updated_at to the update
/// - Filters by id
/// - Checks rows_affected to surface a missing row as RecordNotFound
/// - Refetches and returns the updated model
///
/// The caller provides a closure that configures entity-specific columns.
async fn update_then_fetch<C, F>(
    conn: &C,
    id: Uuid,
    configure_update: F,
) -> Result<games::Model, sea_orm::DbErr>
where
    C: ConnectionTrait + Send + Sync,
    F: FnOnce(sea_orm::UpdateMany<games::Entity>) -> sea_orm::UpdateMany<games::Entity>,
{
    use sea_orm::sea_query::Expr;

    let now = time::OffsetDateTime::now_utc();

    let result = configure_update(games::Entity::update_many())
        .col_expr(games::Column::UpdatedAt, Expr::val(now).into())
        .filter(games::Column::Id.eq(id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(sea_orm::DbErr::RecordNotFound("Game not found".to_string()));
    }

    // Fetch and return the updated game
    games::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::Id.eq(game_id))
        .one(conn)
        .await
}

/// Find game by ID or return RecordNotFound error.
///
/// Convenience helper that converts `None` into a DbErr::RecordNotFound,
/// eliminating the repetitive `ok_or_else` pattern when a game must exist.
pub async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: Uuid,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Game not found".to_string()))
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game_active = games::ActiveModel {
        id: Set(dto.id),
        variant: Set(dto.variant),
        grid: Set(dto.grid),
        score: Set(dto.score),
        moves: Set(dto.moves),
        next_item: Set(dto.next_item),
        game_over: Set(dto.game_over),
        rng_seed: Set(dto.rng_seed),
        created_at: Set(dto.created_at),
        updated_at: Set(dto.created_at),
    };

    game_active.insert(conn).await
}

pub async fn update_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameUpdate,
) -> Result<games::Model, sea_orm::DbErr> {
    use sea_orm::sea_query::Expr;

    update_then_fetch(conn, dto.id, |update| {
        update
            .col_expr(games::Column::Grid, Expr::val(dto.grid.clone()).into())
            .col_expr(games::Column::Score, Expr::val(dto.score).into())
            .col_expr(games::Column::Moves, Expr::val(dto.moves).into())
            .col_expr(games::Column::NextItem, Expr::val(dto.next_item).into())
            .col_expr(games::Column::GameOver, Expr::val(dto.game_over).into())
    })
    .await
}

/// Terminal games ranked by score, best first.
pub async fn top_scores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    limit: u64,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .filter(games::Column::GameOver.eq(true))
        .order_by_desc(games::Column::Score)
        .limit(limit)
        .all(conn)
        .await
}
