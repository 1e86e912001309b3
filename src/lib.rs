//! Strands
//!
//! A word-path puzzle engine: trace words through a letter grid by dragging
//! across adjacent cells, find every theme word and the spangram, and earn
//! hints from valid words that are off-theme.
//!
//! # Quick Start
//!
//! ```rust
//! use strands::core::Coord;
//! use strands::game::{MemoryStore, SessionController, Verdict};
//! use strands::wordlists::Dictionary;
//!
//! let puzzle = strands::puzzle::builtin().unwrap();
//! let mut session = SessionController::new(puzzle, Dictionary::fallback(), MemoryStore::new());
//!
//! // Drag I-R-I-S
//! let path = [(1, 4), (1, 3), (2, 2), (3, 2)].map(|(r, c)| Coord::new(r, c));
//! let drag = session.pointer_down(path[0]).drag.unwrap();
//! for &cell in &path[1..] {
//!     session.pointer_move(drag, cell);
//! }
//! let snapshot = session.pointer_up(drag, Some(path[3]));
//!
//! assert_eq!(snapshot.verdict, Some(Verdict::ThemeWord));
//! assert_eq!(snapshot.found_summary(), "1 of 7 theme words found.");
//! ```

// Grid, coordinates and selection paths
pub mod core;

// Puzzle definition and files
pub mod puzzle;

// Word lists and the dictionary oracle
pub mod wordlists;

// Game engine and session controller
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
