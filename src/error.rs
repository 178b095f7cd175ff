use std::fmt;

use thiserror::Error;

use crate::core::coord::Coord;

/// Where an out-of-bounds lookup pointed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Coordinates(Coord),
    Index(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Coordinates(c) => write!(f, "coordinates ({}, {})", c.x, c.y),
            Location::Index(i) => write!(f, "index {i}"),
        }
    }
}

/// Errors raised by board lookups.
///
/// Board edges met while tracing a move are not errors; only caller-supplied
/// positions end up here.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("{location} out of bounds for a {width}x{height} board")]
    OutOfBounds {
        location: Location,
        width: usize,
        height: usize,
    },
}

pub type BoardResult<T> = Result<T, BoardError>;
