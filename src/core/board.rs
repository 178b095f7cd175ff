use crate::core::coord::Coord;
use crate::error::{BoardError, BoardResult, Location};

/// Largest width or height a board may have.
///
/// The longest step is 2 cells, so a probe from any cell stays within `i32`.
pub const MAX_DIMENSION: usize = (i32::MAX - 2) as usize;

/// An empty rectangular board.
///
/// Cells are numbered column by column: the linear index of `(x, y)` is
/// `x * height + y`. Consumers store placements as linear indices, so this
/// mapping must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Board {
    width: usize,
    height: usize,
}

impl Board {
    /// A `width` by `height` board.
    ///
    /// # Panics
    ///
    /// If either dimension is zero or exceeds [`MAX_DIMENSION`], or the cell
    /// count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        assert!(
            width <= MAX_DIMENSION && height <= MAX_DIMENSION,
            "board dimensions exceed MAX_DIMENSION"
        );
        assert!(
            width.checked_mul(height).is_some(),
            "board cell count overflows usize"
        );
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false: a board has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.width && (c.y as usize) < self.height
    }

    /// Linear index of `c`, or `None` past an edge.
    #[inline]
    pub fn index_of(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some(c.x as usize * self.height + c.y as usize)
        } else {
            None
        }
    }

    /// Coordinates of a linear index, or `None` if it is not a cell.
    #[inline]
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        if index < self.len() {
            Some(Coord::new(
                (index / self.height) as i32,
                (index % self.height) as i32,
            ))
        } else {
            None
        }
    }

    pub fn validate_position(&self, x: i32, y: i32) -> BoardResult<()> {
        if self.contains(Coord::new(x, y)) {
            Ok(())
        } else {
            Err(self.out_of_bounds(Location::Coordinates(Coord::new(x, y))))
        }
    }

    pub fn coordinates_to_index(&self, x: i32, y: i32) -> BoardResult<usize> {
        self.index_of(Coord::new(x, y))
            .ok_or_else(|| self.out_of_bounds(Location::Coordinates(Coord::new(x, y))))
    }

    pub fn index_to_coordinates(&self, index: usize) -> BoardResult<(i32, i32)> {
        self.coord_of(index)
            .map(|c| (c.x, c.y))
            .ok_or_else(|| self.out_of_bounds(Location::Index(index)))
    }

    /// All linear indices, ascending.
    pub fn indices(&self) -> std::ops::Range<usize> {
        0..self.len()
    }

    /// All cells in linear-index order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let height = self.height as i32;
        (0..self.width as i32).flat_map(move |x| (0..height).map(move |y| Coord::new(x, y)))
    }

    fn out_of_bounds(&self, location: Location) -> BoardError {
        BoardError::OutOfBounds {
            location,
            width: self.width,
            height: self.height,
        }
    }
}
