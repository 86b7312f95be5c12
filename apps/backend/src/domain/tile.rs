//! Cell values and item tiers.
//!
//! Cells travel on the wire and in storage as small signed integers:
//! tiers 0..=7 literally, negative sentinels for everything else.

use crate::errors::domain::{DomainError, InfraErrorKind};

const EMPTY_CODE: i8 = -99;
const RAIDER_CODE: i8 = -1;
const DEBRIS_CODE: i8 = -2;
const BOULDER_CODE: i8 = -3;

/// Item tier in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

impl Tier {
    /// All tiers, ascending.
    pub const ALL: [Tier; 8] = [
        Tier(0),
        Tier(1),
        Tier(2),
        Tier(3),
        Tier(4),
        Tier(5),
        Tier(6),
        Tier(7),
    ];

    /// Tier new placements start from.
    pub const BASE: Tier = Tier(0);

    /// Capstone tier; groups of it are never merged further.
    pub const CAP: Tier = Tier(7);

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::CAP.0).then_some(Self(value))
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Tier produced when a group of this tier merges.
    #[inline]
    pub fn promoted(self) -> Tier {
        if self.0 >= 6 {
            Self::CAP
        } else {
            Tier(self.0 + 1)
        }
    }
}

/// What a single grid cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// Nothing placed yet.
    Empty,
    /// A placed item of the given tier.
    Item(Tier),
    /// Hostile unit that wanders one step per turn.
    Raider,
    /// Wreck left where a raider got trapped.
    Debris,
    /// Inert obstacle; never merges, never moves.
    Boulder,
}

impl Tile {
    /// Wire/storage code for this cell.
    pub fn code(self) -> i8 {
        match self {
            Tile::Empty => EMPTY_CODE,
            Tile::Item(tier) => tier.value() as i8,
            Tile::Raider => RAIDER_CODE,
            Tile::Debris => DEBRIS_CODE,
            Tile::Boulder => BOULDER_CODE,
        }
    }

    /// Decodes a stored cell, rejecting codes outside the taxonomy.
    pub fn from_code(code: i8) -> Result<Self, DomainError> {
        match code {
            EMPTY_CODE => Ok(Tile::Empty),
            RAIDER_CODE => Ok(Tile::Raider),
            DEBRIS_CODE => Ok(Tile::Debris),
            BOULDER_CODE => Ok(Tile::Boulder),
            0..=7 => Ok(Tile::Item(Tier(code as u8))),
            other => Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("unknown cell code {other}"),
            )),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }
}
