//! Turn pipeline: rejections, spawns, scoring, and the terminal
//! transition.

use time::OffsetDateTime;
use uuid::Uuid;

use super::board::{positions, Board, Pos};
use super::items::Variant;
use super::rng::{ScriptedRng, SeededTurnRng};
use super::state::{GameState, RejectReason};
use super::tile::{Tier, Tile};
use super::turn::{evaluate_turn, new_game};

const E: i8 = -99;

fn board_from(rows: [[i8; 6]; 6]) -> Board {
    let rows: Vec<Vec<i8>> = rows.iter().map(|row| row.to_vec()).collect();
    Board::decode(&rows).expect("test grid uses valid cell codes")
}

fn pos(x: u8, y: u8) -> Pos {
    Pos { x, y }
}

fn fresh_state() -> GameState {
    new_game(
        Uuid::new_v4(),
        Variant::Forest,
        42,
        OffsetDateTime::now_utc(),
        &mut ScriptedRng::new(&[]),
    )
}

/// Full board with no adjacent equal tiers, so nothing can merge.
fn checkerboard() -> Board {
    let mut board = Board::empty();
    for p in positions() {
        let tier = if (p.x + p.y) % 2 == 0 { 3 } else { 4 };
        board.set(p, Tile::Item(Tier::ALL[tier as usize]));
    }
    board
}

#[test]
fn opening_state_offers_the_base_tier() {
    let state = fresh_state();

    assert_eq!(state.moves, 0);
    assert_eq!(state.score, 0);
    assert_eq!(state.next_item, Tier::BASE);
    assert!(!state.game_over);
    assert!(!state.board.is_full());
}

#[test]
fn terminal_games_reject_every_move() {
    let mut state = fresh_state();
    state.game_over = true;

    let outcome = evaluate_turn(&state, 0, 0, &mut ScriptedRng::new(&[]));

    assert!(!outcome.accepted);
    assert_eq!(outcome.rejection, Some(RejectReason::GameOver));
    assert_eq!(outcome.rejection.map(RejectReason::message), Some("game is over"));
    assert_eq!(outcome.state, state);
    assert!(outcome.cleared.is_empty());
}

#[test]
fn out_of_bounds_coordinates_are_rejected() {
    let state = fresh_state();

    for (x, y) in [(6, 0), (0, 6), (-1, 3), (3, -1), (100, 100)] {
        let outcome = evaluate_turn(&state, x, y, &mut ScriptedRng::new(&[]));
        assert!(!outcome.accepted, "({x},{y}) should be rejected");
        assert_eq!(outcome.rejection, Some(RejectReason::OutOfBounds));
        assert_eq!(
            outcome.rejection.map(RejectReason::message),
            Some("invalid position")
        );
        assert_eq!(outcome.state, state);
    }
}

#[test]
fn occupied_cells_are_rejected() {
    let mut state = fresh_state();
    state.board.set(pos(1, 1), Tile::Item(Tier::BASE));

    let outcome = evaluate_turn(&state, 1, 1, &mut ScriptedRng::new(&[]));

    assert!(!outcome.accepted);
    assert_eq!(outcome.rejection, Some(RejectReason::Occupied));
    assert_eq!(
        outcome.rejection.map(RejectReason::message),
        Some("tile is not empty")
    );
    assert_eq!(outcome.state, state);
}

#[test]
fn accepted_move_places_the_pending_item() {
    let state = fresh_state();

    let outcome = evaluate_turn(&state, 2, 3, &mut ScriptedRng::new(&[]));

    assert!(outcome.accepted);
    assert_eq!(outcome.rejection, None);
    assert_eq!(outcome.state.board.get(pos(2, 3)), Tile::Item(Tier::BASE));
    assert_eq!(outcome.state.moves, 1);
    assert_eq!(outcome.state.score, 0);
    assert_eq!(outcome.state.next_item, Tier::BASE);
    assert!(outcome.cleared.is_empty());
}

#[test]
fn placement_can_complete_a_merge() {
    let mut state = fresh_state();
    state.board.set(pos(0, 1), Tile::Item(Tier::BASE));
    state.board.set(pos(0, 2), Tile::Item(Tier::BASE));

    let outcome = evaluate_turn(&state, 0, 0, &mut ScriptedRng::new(&[]));

    assert!(outcome.accepted);
    assert_eq!(outcome.state.score, 30);
    assert_eq!(outcome.cleared.len(), 3);
    assert_eq!(outcome.cleared[0], pos(0, 0));
    assert_eq!(outcome.state.board.get(pos(0, 0)), Tile::Item(Tier::ALL[1]));
    assert_eq!(outcome.state.board.get(pos(0, 1)), Tile::Empty);
}

#[test]
fn spawn_roll_can_place_a_raider_instead() {
    let mut state = fresh_state();
    state.moves = 10; // 20 percent spawn chance

    // Draws: spawn roll 5 (hit), raider step pick, next-item stage.
    let outcome = evaluate_turn(&state, 3, 3, &mut ScriptedRng::new(&[5, 0, 0]));

    assert!(outcome.accepted);
    assert_eq!(outcome.state.board.get(pos(3, 3)), Tile::Empty);
    assert_eq!(outcome.state.board.get(pos(3, 4)), Tile::Raider);
    assert_eq!(outcome.state.moves, 11);
    assert_eq!(outcome.state.next_item, Tier::BASE);
}

#[test]
fn failed_spawn_roll_places_the_item() {
    let mut state = fresh_state();
    state.moves = 10;

    // Draws: spawn roll 99 (miss), next-item stage index 1.
    let outcome = evaluate_turn(&state, 3, 3, &mut ScriptedRng::new(&[99, 1]));

    assert!(outcome.accepted);
    assert_eq!(outcome.state.board.get(pos(3, 3)), Tile::Item(Tier::BASE));
    assert_eq!(outcome.state.next_item, Tier::ALL[1]);
}

#[test]
fn spawn_chance_uses_the_pre_increment_move_counter() {
    let mut state = fresh_state();
    state.moves = 9; // still zero chance; the roll consumes no draw

    // Single draw: next-item stage at post-increment moves=10.
    let outcome = evaluate_turn(&state, 0, 0, &mut ScriptedRng::new(&[0]));

    assert!(outcome.accepted);
    assert_eq!(outcome.state.board.get(pos(0, 0)), Tile::Item(Tier::BASE));
    assert_eq!(outcome.state.next_item, Tier::BASE);
}

#[test]
fn next_item_uses_the_post_increment_move_counter() {
    let mut state = fresh_state();
    state.moves = 4; // post-increment 5 enters the weighted stage

    let outcome = evaluate_turn(&state, 0, 0, &mut ScriptedRng::new(&[1]));

    assert!(outcome.accepted);
    assert_eq!(outcome.state.next_item, Tier::ALL[1]);
}

#[test]
fn filling_the_last_cell_ends_the_game() {
    let mut state = fresh_state();
    state.board = checkerboard();
    state.board.set(pos(5, 5), Tile::Empty);
    state.moves = 1;

    let outcome = evaluate_turn(&state, 5, 5, &mut ScriptedRng::new(&[]));

    assert!(outcome.accepted);
    assert!(outcome.state.game_over);

    let after = evaluate_turn(&outcome.state, 5, 5, &mut ScriptedRng::new(&[]));
    assert!(!after.accepted);
    assert_eq!(after.rejection, Some(RejectReason::GameOver));
    assert_eq!(after.state, outcome.state);
}

#[test]
fn merge_that_frees_cells_keeps_the_game_alive() {
    let mut state = fresh_state();
    state.board = checkerboard();
    state.board.set(pos(0, 0), Tile::Item(Tier::BASE));
    state.board.set(pos(0, 1), Tile::Item(Tier::BASE));
    state.board.set(pos(0, 2), Tile::Empty);
    state.moves = 1;

    let outcome = evaluate_turn(&state, 0, 2, &mut ScriptedRng::new(&[]));

    assert!(outcome.accepted);
    assert!(!outcome.state.game_over);
    assert_eq!(outcome.state.score, 30);
    assert_eq!(outcome.state.board.get(pos(0, 0)), Tile::Item(Tier::ALL[1]));
}

#[test]
fn equal_seeds_produce_identical_turns() {
    let mut state = fresh_state();
    state.moves = 25;
    state.board.set(pos(4, 4), Tile::Raider);

    let a = evaluate_turn(&state, 2, 2, &mut SeededTurnRng::for_turn(state.rng_seed, 25));
    let b = evaluate_turn(&state, 2, 2, &mut SeededTurnRng::for_turn(state.rng_seed, 25));

    assert_eq!(a, b);
}
