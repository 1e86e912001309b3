//! Command implementations

pub mod check;
pub mod simple;
pub mod words;

pub use check::{CheckReport, check_puzzle};
pub use simple::{InputError, SimpleCommand, parse_command, run_simple};
pub use words::{GridWord, WordSearchResult, find_words};
