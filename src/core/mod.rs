//! Board geometry, free of any piece rules.
//!
//! - [`coord`]: signed integer coordinates with vector arithmetic.
//! - [`board`]: board dimensions and the `x * height + y` linear indexing.

pub mod board;
pub mod coord;
