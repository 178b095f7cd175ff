use std::fmt;
use std::ops::Deref;

use log::trace;

use crate::chess::piece::{Movement, Piece};
use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::error::BoardResult;

/// Cells a piece occupies or threatens, indexed like the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Territory {
    piece: Piece,
    height: usize,
    cells: Vec<bool>,
}

impl Territory {
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn is_marked(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    /// True if `index` is threatened, not merely occupied.
    #[inline]
    pub fn covers(&self, index: usize) -> bool {
        index != self.piece.position && self.is_marked(index)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&b| b).count()
    }

    /// Linear indices of marked cells, ascending.
    pub fn marked(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    pub fn into_vec(self) -> Vec<bool> {
        self.cells
    }
}

impl Deref for Territory {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.cells
    }
}

impl From<Territory> for Vec<bool> {
    fn from(t: Territory) -> Self {
        t.cells
    }
}

/// One line per column `x`, cells `y = 0..height` left to right.
impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, column) in self.cells.chunks(self.height).enumerate() {
            if x > 0 {
                writeln!(f)?;
            }
            for (y, &marked) in column.iter().enumerate() {
                let c = if x * self.height + y == self.piece.position {
                    self.piece.kind.symbol()
                } else if marked {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

/// Territory of `piece` on an otherwise empty `board`.
///
/// Fails only if the piece itself is off the board. Offsets and rays that
/// run past an edge are dropped silently.
pub fn territory(piece: Piece, board: &Board) -> BoardResult<Territory> {
    let (x, y) = board.index_to_coordinates(piece.position)?;
    let origin = Coord::new(x, y);

    let mut cells = vec![false; board.len()];
    cells[piece.position] = true;

    match piece.kind.movement() {
        Movement::Step(offsets) => {
            for &delta in offsets {
                if let Some(sq) = board.index_of(origin + delta) {
                    cells[sq] = true;
                }
            }
        }
        Movement::Slide(dirs) => {
            for &dir in dirs {
                let mut cur = origin + dir;
                while let Some(sq) = board.index_of(cur) {
                    cells[sq] = true;
                    cur += dir;
                }
            }
        }
    }

    let territory = Territory {
        piece,
        height: board.height(),
        cells,
    };
    trace!(
        "{} at ({}, {}) on {}x{}: {} cells",
        piece.kind,
        x,
        y,
        board.width(),
        board.height(),
        territory.count()
    );
    Ok(territory)
}

impl Piece {
    /// See [`territory`].
    #[inline]
    pub fn territory(self, board: &Board) -> BoardResult<Territory> {
        territory(self, board)
    }
}
