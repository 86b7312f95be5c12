//! Turn evaluation: the full pipeline for one move.

use time::OffsetDateTime;
use uuid::Uuid;

use super::board::{Board, Pos};
use super::generator;
use super::items::Variant;
use super::merge;
use super::raiders;
use super::rng::TurnRng;
use super::rules;
use super::state::{GameState, RejectReason, TurnOutcome};
use super::tile::Tile;

/// Fresh game with an empty grid and the opening pending item.
pub fn new_game(
    id: Uuid,
    variant: Variant,
    rng_seed: i64,
    created_at: OffsetDateTime,
    rng: &mut dyn TurnRng,
) -> GameState {
    GameState {
        id,
        variant,
        board: Board::empty(),
        score: 0,
        moves: 0,
        next_item: generator::next_item(0, rng),
        game_over: false,
        rng_seed,
        created_at,
    }
}

/// Evaluates one move against `state` without touching the input.
///
/// Refusals come back as rejected outcomes carrying the unchanged
/// state; errors are reserved for infrastructure failures elsewhere.
pub fn evaluate_turn(state: &GameState, x: i32, y: i32, rng: &mut dyn TurnRng) -> TurnOutcome {
    if state.game_over {
        return TurnOutcome::rejected(state.clone(), RejectReason::GameOver);
    }
    let Some(target) = Pos::checked(x, y) else {
        return TurnOutcome::rejected(state.clone(), RejectReason::OutOfBounds);
    };
    if state.board.get(target) != Tile::Empty {
        return TurnOutcome::rejected(state.clone(), RejectReason::Occupied);
    }

    let mut next = state.clone();

    // The spawn roll runs against the pre-increment move counter and
    // consumes no randomness while the chance is still zero.
    let chance = rules::raider_spawn_chance(next.moves);
    let placed = if chance > 0 && rng.uniform(100) < chance {
        Tile::Raider
    } else {
        Tile::Item(next.next_item)
    };
    next.board.set(target, placed);
    next.moves += 1;

    let merges = merge::resolve_merges(&mut next.board, next.variant.rules());
    next.score += merges.score_delta;

    raiders::advance_raiders(&mut next.board, rng);

    next.next_item = generator::next_item(next.moves, rng);
    next.game_over = next.board.is_full();

    TurnOutcome {
        accepted: true,
        state: next,
        rejection: None,
        cleared: merges.cleared,
    }
}
