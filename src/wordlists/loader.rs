//! Word list loading utilities
//!
//! Dictionary files hold one word per line. Only purely alphabetic words of
//! at least four letters are kept, lower-cased.

use crate::puzzle::MIN_WORD_LEN;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize a raw dictionary line
///
/// Returns the lower-cased word, or `None` for blank lines, words shorter than
/// [`MIN_WORD_LEN`] and anything that is not purely ASCII letters.
#[must_use]
pub fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.len() < MIN_WORD_LEN || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// Load words from a file
///
/// Returns normalized words, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use strands::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Normalize every line of a word list
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content.lines().filter_map(normalize).collect()
}
