//! Puzzle validation report
//!
//! Loading already rejects malformed puzzles. This adds the softer checks a
//! puzzle author cares about: every cell used exactly once.

use crate::core::Coord;
use crate::puzzle::Puzzle;

/// Summary of a validated puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub rows: usize,
    pub cols: usize,
    pub theme_words: usize,
    pub spangram: String,
    /// Cells no solution passes through
    pub uncovered: Vec<Coord>,
    /// Cells more than one solution passes through
    pub overlapping: Vec<Coord>,
}

impl CheckReport {
    /// Every cell belongs to exactly one solution
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.uncovered.is_empty() && self.overlapping.is_empty()
    }
}

/// Inspect a loaded puzzle
#[must_use]
pub fn check_puzzle(puzzle: &Puzzle) -> CheckReport {
    CheckReport {
        rows: puzzle.grid().rows(),
        cols: puzzle.grid().cols(),
        theme_words: puzzle.theme_words().count(),
        spangram: puzzle.spangram().word.clone(),
        uncovered: puzzle.uncovered_cells(),
        overlapping: puzzle.overlapping_cells(),
    }
}
