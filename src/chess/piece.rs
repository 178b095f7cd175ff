use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::board::Board;
use crate::core::coord::Coord;
use crate::error::BoardResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
}

/// How a piece kind reaches other cells in one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Each offset is tried once from the origin.
    Step(&'static [Coord]),
    /// Each direction is repeated from the origin until it leaves the board.
    Slide(&'static [Coord]),
}

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub fn movement(self) -> Movement {
        use PieceKind::*;
        match self {
            King => Movement::Step(&KING_STEPS),
            Knight => Movement::Step(&KNIGHT_DELTAS),
            Queen => Movement::Slide(&QUEEN_DIRS),
            Rook => Movement::Slide(&ROOK_DIRS),
            Bishop => Movement::Slide(&BISHOP_DIRS),
        }
    }

    #[inline]
    pub fn is_slider(self) -> bool {
        matches!(self.movement(), Movement::Slide(_))
    }

    /// Upper-case letter used in algebraic notation.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown piece kind: {0:?}")]
pub struct ParsePieceKindError(pub String);

impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    /// Accepts full names in any case, or the single-letter symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        PieceKind::ALL
            .into_iter()
            .find(|k| {
                lower == k.name() || lower == k.symbol().to_ascii_lowercase().to_string()
            })
            .ok_or_else(|| ParsePieceKindError(s.to_string()))
    }
}

/// A piece kind standing on a linear board index.
///
/// The board is supplied per query; a piece holds no reference to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub position: usize,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// A piece at `(x, y)`, failing if that cell is off `board`.
    pub fn at(board: &Board, kind: PieceKind, x: i32, y: i32) -> BoardResult<Self> {
        let position = board.coordinates_to_index(x, y)?;
        Ok(Self { kind, position })
    }
}

/// The 8 king steps around the origin.
pub const KING_STEPS: [Coord; 8] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: 1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
    Coord { x: -1, y: -1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { x: -2, y: -1 },
    Coord { x: -2, y: 1 },
    Coord { x: -1, y: -2 },
    Coord { x: -1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: 1, y: 2 },
    Coord { x: 2, y: -1 },
    Coord { x: 2, y: 1 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_directions_are_rook_plus_bishop() {
        let mut union: Vec<Coord> = ROOK_DIRS.iter().chain(BISHOP_DIRS.iter()).copied().collect();
        let mut queen = QUEEN_DIRS.to_vec();
        union.sort();
        queen.sort();
        assert_eq!(union, queen);
    }

    #[test]
    fn step_tables_have_expected_shape() {
        assert!(KING_STEPS.iter().all(|d| d.chebyshev_norm() == 1));
        assert!(KNIGHT_DELTAS
            .iter()
            .all(|d| d.l1() == 3 && d.chebyshev_norm() == 2));
        assert!(!PieceKind::King.is_slider());
        assert!(!PieceKind::Knight.is_slider());
        assert!(PieceKind::Queen.is_slider());
    }

    #[test]
    fn kinds_parse_from_names_and_symbols() {
        assert_eq!("king".parse(), Ok(PieceKind::King));
        assert_eq!("Queen".parse(), Ok(PieceKind::Queen));
        assert_eq!(" ROOK ".parse(), Ok(PieceKind::Rook));
        assert_eq!("b".parse(), Ok(PieceKind::Bishop));
        assert_eq!("N".parse(), Ok(PieceKind::Knight));
        assert_eq!(
            "pawn".parse::<PieceKind>(),
            Err(ParsePieceKindError("pawn".to_string()))
        );
        for kind in PieceKind::ALL {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn piece_at_validates_coordinates() {
        let board = Board::new(3, 4);
        let p = Piece::at(&board, PieceKind::Rook, 2, 1).unwrap();
        assert_eq!(p.position, 9);
        assert!(Piece::at(&board, PieceKind::Rook, 3, 0).is_err());
    }
}
