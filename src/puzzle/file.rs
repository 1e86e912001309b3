//! JSON puzzle files and the built-in puzzle
//!
//! ```json
//! {
//!   "rows": ["ITARDA", "..."],
//!   "themeWords": [{ "word": "IRIS", "path": [[1, 4], [1, 3], [2, 2], [3, 2]] }],
//!   "spangram": { "word": "GUITARDATE", "path": [[2, 0], "..."] }
//! }
//! ```

use super::{Puzzle, PuzzleError};
use crate::core::{Coord, Grid};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUILTIN_PUZZLE: &str = include_str!("../../data/puzzle.json");

/// On-disk representation of a puzzle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleFile {
    pub rows: Vec<String>,
    pub theme_words: Vec<SolutionEntry>,
    pub spangram: SolutionEntry,
}

/// A word and its canonical path as `[row, col]` pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionEntry {
    pub word: String,
    pub path: Vec<[usize; 2]>,
}

impl SolutionEntry {
    fn into_parts(self) -> (String, Vec<Coord>) {
        (self.word, self.path.into_iter().map(Coord::from).collect())
    }
}

impl PuzzleFile {
    /// Parse a puzzle file from JSON text
    ///
    /// # Errors
    /// Returns `PuzzleError::Parse` on malformed JSON.
    pub fn from_json(text: &str) -> Result<Self, PuzzleError> {
        serde_json::from_str(text).map_err(|e| PuzzleError::Parse(e.to_string()))
    }

    /// Validate into a playable puzzle
    ///
    /// # Errors
    /// Returns `PuzzleError` if the grid or any solution is invalid.
    pub fn into_puzzle(self) -> Result<Puzzle, PuzzleError> {
        let grid = Grid::new(&self.rows)?;
        let theme_words = self
            .theme_words
            .into_iter()
            .map(SolutionEntry::into_parts)
            .collect();
        Puzzle::new(grid, theme_words, self.spangram.into_parts())
    }
}

impl From<&Puzzle> for PuzzleFile {
    fn from(puzzle: &Puzzle) -> Self {
        let entry = |word: &str, path: &[Coord]| SolutionEntry {
            word: word.to_string(),
            path: path.iter().copied().map(<[usize; 2]>::from).collect(),
        };
        Self {
            rows: puzzle.grid().row_strings().collect(),
            theme_words: puzzle
                .theme_words()
                .map(|s| entry(&s.word, &s.path))
                .collect(),
            spangram: entry(&puzzle.spangram().word, &puzzle.spangram().path),
        }
    }
}

/// The puzzle shipped with the game
///
/// # Errors
/// Only fails if the embedded puzzle data is broken.
///
/// # Examples
/// ```
/// let puzzle = strands::puzzle::builtin().unwrap();
/// assert_eq!(puzzle.spangram().word, "GUITARDATE");
/// assert_eq!(puzzle.total_words(), 7);
/// ```
pub fn builtin() -> Result<Puzzle, PuzzleError> {
    PuzzleFile::from_json(BUILTIN_PUZZLE)?.into_puzzle()
}

/// Load and validate a puzzle from a JSON file
///
/// # Errors
/// Returns `PuzzleError::Io` if the file cannot be read, otherwise any parse
/// or validation error.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleError> {
    let text = fs::read_to_string(path).map_err(|e| PuzzleError::Io(e.to_string()))?;
    PuzzleFile::from_json(&text)?.into_puzzle()
}
