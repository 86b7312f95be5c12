//! Raider movement and trapping.

use super::board::{positions, Board, Pos};
use super::raiders::advance_raiders;
use super::rng::ScriptedRng;
use super::tile::{Tier, Tile};

const E: i8 = -99;

fn board_from(rows: [[i8; 6]; 6]) -> Board {
    let rows: Vec<Vec<i8>> = rows.iter().map(|row| row.to_vec()).collect();
    Board::decode(&rows).expect("test grid uses valid cell codes")
}

fn pos(x: u8, y: u8) -> Pos {
    Pos { x, y }
}

#[test]
fn raider_steps_to_the_drawn_neighbor() {
    let mut board = board_from([
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
        [E, E, -1, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
    ]);

    // Probe order around (2,2) is (2,3), (2,1), (3,2), (1,2).
    advance_raiders(&mut board, &mut ScriptedRng::new(&[2]));

    assert_eq!(board.get(pos(2, 2)), Tile::Empty);
    assert_eq!(board.get(pos(3, 2)), Tile::Raider);
}

#[test]
fn surrounded_raider_collapses_into_debris() {
    let mut board = board_from([
        [-1, 3, E, E, E, E],
        [4, E, E, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
    ]);

    advance_raiders(&mut board, &mut ScriptedRng::new(&[]));

    assert_eq!(board.get(pos(0, 0)), Tile::Debris);
    assert_eq!(board.get(pos(0, 1)), Tile::Item(Tier::ALL[3]));
}

#[test]
fn blockers_of_any_kind_trap_a_raider() {
    let mut board = board_from([
        [E, E, E, E, E, E],
        [E, E, 4, E, E, E],
        [E, -2, -1, -3, E, E],
        [E, E, 5, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
    ]);

    advance_raiders(&mut board, &mut ScriptedRng::new(&[]));

    assert_eq!(board.get(pos(2, 2)), Tile::Debris);
    assert_eq!(board.get(pos(2, 1)), Tile::Debris);
    assert_eq!(board.get(pos(2, 3)), Tile::Boulder);
}

#[test]
fn later_raider_may_take_a_vacated_cell() {
    let mut board = board_from([
        [-1, -1, E, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
    ]);

    // (0,0) moves first: its only empty probe is (1,0). (0,1) then
    // sees the vacated (0,0) among its options and takes it.
    advance_raiders(&mut board, &mut ScriptedRng::new(&[0, 1]));

    assert_eq!(board.get(pos(1, 0)), Tile::Raider);
    assert_eq!(board.get(pos(0, 0)), Tile::Raider);
    assert_eq!(board.get(pos(0, 1)), Tile::Empty);
}

#[test]
fn every_raider_moves_once_per_step() {
    let mut board = board_from([
        [E, E, E, E, E, E],
        [E, -1, E, E, E, E],
        [E, E, E, E, E, E],
        [E, E, E, -1, E, E],
        [E, E, E, E, E, E],
        [E, E, E, E, E, E],
    ]);

    advance_raiders(&mut board, &mut ScriptedRng::new(&[0, 0]));

    let raiders: Vec<Pos> = positions()
        .filter(|&p| board.get(p) == Tile::Raider)
        .collect();
    assert_eq!(raiders, vec![pos(1, 2), pos(3, 4)]);
}
