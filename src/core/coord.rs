//! Grid coordinates and the adjacency model
//!
//! Two cells are adjacent when they touch horizontally, vertically or diagonally.

use std::fmt;
use std::str::FromStr;

/// A `(row, col)` position on the letter grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// Error type for unparseable coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    MissingSeparator(String),
    InvalidNumber(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator(s) => write!(f, "Expected 'row,col', got '{s}'"),
            Self::InvalidNumber(s) => write!(f, "Invalid coordinate number '{s}'"),
        }
    }
}

impl std::error::Error for CoordError {}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether `other` is one of the eight neighbours of this cell
    #[inline]
    #[must_use]
    pub const fn is_adjacent_to(self, other: Self) -> bool {
        is_adjacent(self, other)
    }
}

/// Are `a` and `b` distinct cells within one step of each other (diagonals included)?
///
/// # Examples
/// ```
/// use strands::core::{Coord, is_adjacent};
///
/// assert!(is_adjacent(Coord::new(1, 1), Coord::new(2, 2)));
/// assert!(!is_adjacent(Coord::new(1, 1), Coord::new(1, 1)));
/// assert!(!is_adjacent(Coord::new(0, 0), Coord::new(0, 2)));
/// ```
#[inline]
#[must_use]
pub const fn is_adjacent(a: Coord, b: Coord) -> bool {
    let dr = a.row.abs_diff(b.row);
    let dc = a.col.abs_diff(b.col);
    dr <= 1 && dc <= 1 && !(dr == 0 && dc == 0)
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .trim()
            .split_once(',')
            .ok_or_else(|| CoordError::MissingSeparator(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| CoordError::InvalidNumber(part.trim().to_string()))
        };

        Ok(Self::new(parse(row)?, parse(col)?))
    }
}

impl From<[usize; 2]> for Coord {
    fn from([row, col]: [usize; 2]) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for [usize; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}
