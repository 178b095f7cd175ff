//! Territories of chess pieces on an empty rectangular board.
//!
//! A piece's territory is the set of cells it occupies or attacks in one move,
//! returned as one boolean per cell in the board's linear order
//! (`x * height + y`). Every query is a pure function of the board, the piece
//! kind and its position, so queries may run in parallel freely.

pub mod chess;
pub mod core;
pub mod error;

pub use crate::chess::piece::{Movement, ParsePieceKindError, Piece, PieceKind};
pub use crate::chess::territory::{territory, Territory};
pub use crate::core::board::{Board, MAX_DIMENSION};
pub use crate::core::coord::Coord;
pub use crate::error::{BoardError, BoardResult, Location};
