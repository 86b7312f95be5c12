//! Game store implementations behind the `GameStore` seam.

pub mod games;
pub mod memory;
pub mod sea;

pub use games::{GameStore, ScoreRow};
pub use memory::MemoryGameStore;
pub use sea::SeaGameStore;
