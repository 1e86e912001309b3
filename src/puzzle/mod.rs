//! Puzzle definition: the letter grid plus its solution set
//!
//! A puzzle holds N theme words and exactly one spangram, each with the
//! canonical path used to draw it once found. Construction validates every
//! path against the grid.

mod file;

pub use file::{PuzzleFile, SolutionEntry, builtin, load_from_file};

use crate::core::{Coord, Grid};
use rustc_hash::FxHashMap;
use std::fmt;

/// Minimum letters in a submitted or solution word
pub const MIN_WORD_LEN: usize = 4;

/// How a solution word is scored and styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionKind {
    Theme,
    Spangram,
}

/// A solution word and its canonical path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub word: String,
    pub path: Vec<Coord>,
    pub kind: SolutionKind,
}

/// A validated puzzle
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    solutions: Vec<Solution>,
    index: FxHashMap<String, usize>,
}

/// Error type for invalid puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    Grid(crate::core::GridError),
    NoThemeWords,
    InvalidWord(String),
    DuplicateWord(String),
    OutOfBounds { word: String, cell: Coord },
    RepeatedCell { word: String, cell: Coord },
    NotAdjacent { word: String, from: Coord, to: Coord },
    Misspelled { word: String, spelled: String },
    SpangramDoesNotSpan(String),
    Parse(String),
    Io(String),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "Invalid grid: {e}"),
            Self::NoThemeWords => write!(f, "Puzzle must have at least one theme word"),
            Self::InvalidWord(word) => write!(
                f,
                "Solution '{word}' must be at least {MIN_WORD_LEN} ASCII letters"
            ),
            Self::DuplicateWord(word) => write!(f, "Solution '{word}' appears more than once"),
            Self::OutOfBounds { word, cell } => {
                write!(f, "Path of '{word}' leaves the grid at {cell}")
            }
            Self::RepeatedCell { word, cell } => {
                write!(f, "Path of '{word}' visits {cell} twice")
            }
            Self::NotAdjacent { word, from, to } => {
                write!(f, "Path of '{word}' jumps from {from} to {to}")
            }
            Self::Misspelled { word, spelled } => {
                write!(f, "Path of '{word}' spells '{spelled}'")
            }
            Self::SpangramDoesNotSpan(word) => {
                write!(f, "Spangram '{word}' must touch two opposite edges")
            }
            Self::Parse(msg) => write!(f, "Invalid puzzle file: {msg}"),
            Self::Io(msg) => write!(f, "Cannot read puzzle file: {msg}"),
        }
    }
}

impl std::error::Error for PuzzleError {}

impl From<crate::core::GridError> for PuzzleError {
    fn from(e: crate::core::GridError) -> Self {
        Self::Grid(e)
    }
}

impl Puzzle {
    /// Build and validate a puzzle
    ///
    /// Words are upper-cased. Theme words keep their given order.
    ///
    /// # Errors
    /// Returns `PuzzleError` when a solution word is malformed or duplicated,
    /// when a path leaves the grid, repeats a cell, jumps between
    /// non-adjacent cells or spells something else, or when the spangram does
    /// not touch two opposite edges.
    pub fn new(
        grid: Grid,
        theme_words: Vec<(String, Vec<Coord>)>,
        spangram: (String, Vec<Coord>),
    ) -> Result<Self, PuzzleError> {
        if theme_words.is_empty() {
            return Err(PuzzleError::NoThemeWords);
        }

        let solutions: Vec<Solution> = theme_words
            .into_iter()
            .map(|(word, path)| (word, path, SolutionKind::Theme))
            .chain(std::iter::once((
                spangram.0,
                spangram.1,
                SolutionKind::Spangram,
            )))
            .map(|(word, path, kind)| Solution {
                word: word.to_uppercase(),
                path,
                kind,
            })
            .collect();

        let mut index = FxHashMap::default();
        for (i, solution) in solutions.iter().enumerate() {
            validate_solution(&grid, solution)?;
            if index.insert(solution.word.clone(), i).is_some() {
                return Err(PuzzleError::DuplicateWord(solution.word.clone()));
            }
        }

        Ok(Self {
            grid,
            solutions,
            index,
        })
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All solutions, theme words first and the spangram last
    #[must_use]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Theme words, excluding the spangram
    pub fn theme_words(&self) -> impl Iterator<Item = &Solution> {
        self.solutions
            .iter()
            .filter(|s| s.kind == SolutionKind::Theme)
    }

    #[must_use]
    pub fn spangram(&self) -> &Solution {
        // `new` always appends the spangram last
        &self.solutions[self.solutions.len() - 1]
    }

    /// Look up a solution by word (case-insensitive)
    #[must_use]
    pub fn solution(&self, word: &str) -> Option<&Solution> {
        self.index
            .get(&word.to_uppercase())
            .map(|&i| &self.solutions[i])
    }

    /// How `word` scores, if it is a solution
    #[must_use]
    pub fn kind_of(&self, word: &str) -> Option<SolutionKind> {
        self.solution(word).map(|s| s.kind)
    }

    #[must_use]
    pub fn is_solution(&self, word: &str) -> bool {
        self.solution(word).is_some()
    }

    /// Theme words plus the spangram
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.solutions.len()
    }

    /// Cells not covered by any solution path
    #[must_use]
    pub fn uncovered_cells(&self) -> Vec<Coord> {
        self.grid
            .coords()
            .filter(|&cell| !self.solutions.iter().any(|s| s.path.contains(&cell)))
            .collect()
    }

    /// Cells claimed by more than one solution path
    #[must_use]
    pub fn overlapping_cells(&self) -> Vec<Coord> {
        self.grid
            .coords()
            .filter(|&cell| {
                self.solutions
                    .iter()
                    .filter(|s| s.path.contains(&cell))
                    .count()
                    > 1
            })
            .collect()
    }
}

fn validate_solution(grid: &Grid, solution: &Solution) -> Result<(), PuzzleError> {
    let word = &solution.word;
    if word.len() < MIN_WORD_LEN || !word.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(PuzzleError::InvalidWord(word.clone()));
    }

    for (i, &cell) in solution.path.iter().enumerate() {
        if !grid.contains(cell) {
            return Err(PuzzleError::OutOfBounds {
                word: word.clone(),
                cell,
            });
        }
        if solution.path[..i].contains(&cell) {
            return Err(PuzzleError::RepeatedCell {
                word: word.clone(),
                cell,
            });
        }
    }

    if let Some(pair) = solution
        .path
        .windows(2)
        .find(|pair| !pair[0].is_adjacent_to(pair[1]))
    {
        return Err(PuzzleError::NotAdjacent {
            word: word.clone(),
            from: pair[0],
            to: pair[1],
        });
    }

    let spelled = grid.spell(&solution.path);
    if spelled != *word {
        return Err(PuzzleError::Misspelled {
            word: word.clone(),
            spelled,
        });
    }

    if solution.kind == SolutionKind::Spangram && !grid.spans(&solution.path) {
        return Err(PuzzleError::SpangramDoesNotSpan(word.clone()));
    }

    Ok(())
}
