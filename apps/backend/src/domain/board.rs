//! Fixed-size game grid with row-major iteration helpers.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, InfraErrorKind};

use super::tile::Tile;

/// Cells per side of the square grid.
pub const GRID_SIZE: usize = 6;

pub(crate) const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Probe order shared by merge search and raider movement.
const NEIGHBOR_OFFSETS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// In-bounds grid coordinate. `x` is the outer axis of the encoded
/// form, so row-major order walks `x` first, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    /// Converts raw coordinates, `None` when outside the grid.
    pub fn checked(x: i32, y: i32) -> Option<Pos> {
        let bound = GRID_SIZE as i32;
        if (0..bound).contains(&x) && (0..bound).contains(&y) {
            Some(Pos {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }
}

#[inline]
pub(crate) fn cell_index(pos: Pos) -> usize {
    pos.x as usize * GRID_SIZE + pos.y as usize
}

/// Every position in row-major order.
pub fn positions() -> impl Iterator<Item = Pos> {
    (0..GRID_SIZE as u8)
        .flat_map(|x| (0..GRID_SIZE as u8).map(move |y| Pos { x, y }))
}

/// In-bounds orthogonal neighbors of `of`, in fixed probe order.
pub fn neighbors(of: Pos) -> impl Iterator<Item = Pos> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        Pos::checked(i32::from(of.x) + i32::from(dx), i32::from(of.y) + i32::from(dy))
    })
}

/// Dense 6x6 grid of [`Tile`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Tile; CELL_COUNT],
}

impl Board {
    /// All-empty grid.
    pub fn empty() -> Self {
        Self {
            cells: [Tile::Empty; CELL_COUNT],
        }
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Tile {
        self.cells[cell_index(pos)]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, tile: Tile) {
        self.cells[cell_index(pos)] = tile;
    }

    /// True once no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|tile| *tile != Tile::Empty)
    }

    /// Nested-array form used on the wire and in storage.
    pub fn encode(&self) -> Vec<Vec<i8>> {
        (0..GRID_SIZE)
            .map(|x| {
                (0..GRID_SIZE)
                    .map(|y| self.cells[x * GRID_SIZE + y].code())
                    .collect()
            })
            .collect()
    }

    /// Rebuilds a grid from its encoded form, rejecting wrong shapes
    /// and unknown cell codes.
    pub fn decode(rows: &[Vec<i8>]) -> Result<Self, DomainError> {
        if rows.len() != GRID_SIZE {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("expected {GRID_SIZE} grid rows, got {}", rows.len()),
            ));
        }
        let mut board = Board::empty();
        for (x, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("expected {GRID_SIZE} cells in row {x}, got {}", row.len()),
                ));
            }
            for (y, &code) in row.iter().enumerate() {
                board.cells[x * GRID_SIZE + y] = Tile::from_code(code)?;
            }
        }
        Ok(board)
    }
}
