//! Chess piece movement on an empty rectangular board.

pub mod piece;
pub mod territory;
