//! Letter grid
//!
//! A rectangular, immutable array of upper-case ASCII letters.

use super::Coord;
use std::fmt;

/// The puzzle's letter grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    letters: Vec<u8>,
    rows: usize,
    cols: usize,
}

/// Error type for malformed grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    InvalidLetter {
        row: usize,
        letter: char,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid must have at least one row and one column"),
            Self::RaggedRow { row, expected, got } => {
                write!(f, "Row {row} has {got} letters, expected {expected}")
            }
            Self::InvalidLetter { row, letter } => {
                write!(f, "Row {row} contains non-letter character '{letter}'")
            }
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Build a grid from its rows of letters
    ///
    /// Letters are upper-cased. Every row must have the same length.
    ///
    /// # Errors
    /// Returns `GridError` if the grid is empty, rows differ in length, or a
    /// row contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use strands::core::{Coord, Grid};
    ///
    /// let grid = Grid::new(&["abc", "def"]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.letter(Coord::new(1, 2)), Some('F'));
    ///
    /// assert!(Grid::new(&["abc", "de"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if cols == 0 {
            return Err(GridError::Empty);
        }

        let mut letters = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if let Some(letter) = row.chars().find(|c| !c.is_ascii_alphabetic()) {
                return Err(GridError::InvalidLetter { row: index, letter });
            }
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected: cols,
                    got: row.len(),
                });
            }
            letters.extend(row.bytes().map(|b| b.to_ascii_uppercase()));
        }

        Ok(Self {
            letters,
            rows: rows.len(),
            cols,
        })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a coordinate lies inside the grid
    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Letter at `coord`, or `None` when out of bounds
    #[inline]
    #[must_use]
    pub fn letter(&self, coord: Coord) -> Option<char> {
        self.contains(coord)
            .then(|| char::from(self.letters[coord.row * self.cols + coord.col]))
    }

    /// Read the letters along a path, in order
    ///
    /// Out-of-bounds coordinates are skipped.
    #[must_use]
    pub fn spell(&self, path: &[Coord]) -> String {
        path.iter().filter_map(|&coord| self.letter(coord)).collect()
    }

    /// Every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    /// In-bounds neighbours of `coord`
    pub fn neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let rows = coord.row.saturating_sub(1)..=(coord.row + 1).min(self.rows - 1);
        rows.flat_map(move |row| {
            let cols = coord.col.saturating_sub(1)..=(coord.col + 1).min(self.cols - 1);
            cols.map(move |col| Coord::new(row, col))
        })
        .filter(move |&other| other != coord)
    }

    /// Which edges of the grid a cell touches
    #[must_use]
    pub const fn edges_of(&self, coord: Coord) -> Edges {
        Edges {
            top: coord.row == 0,
            bottom: coord.row + 1 == self.rows,
            left: coord.col == 0,
            right: coord.col + 1 == self.cols,
        }
    }

    /// Does the path touch two opposite edges (top and bottom, or left and right)?
    #[must_use]
    pub fn spans(&self, path: &[Coord]) -> bool {
        let touched = path
            .iter()
            .fold(Edges::default(), |acc, &coord| acc.union(self.edges_of(coord)));
        (touched.top && touched.bottom) || (touched.left && touched.right)
    }

    /// Iterate rows as strings
    pub fn row_strings(&self) -> impl Iterator<Item = String> + '_ {
        self.letters
            .chunks(self.cols)
            .map(|row| row.iter().map(|&b| char::from(b)).collect())
    }
}

/// Set of grid edges touched by a cell or path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Edges {
    #[must_use]
    const fn union(self, other: Self) -> Self {
        Self {
            top: self.top || other.top,
            bottom: self.bottom || other.bottom,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_strings().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
