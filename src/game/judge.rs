//! Word classification
//!
//! Decides what a submitted path's word is worth. Once a word passes the
//! dictionary check it is recorded as used, whatever its verdict.

use super::GameState;
use crate::puzzle::{MIN_WORD_LEN, Puzzle, SolutionKind};
use crate::wordlists::WordOracle;
use tracing::debug;

/// Classification of a submitted word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    TooShort,
    AlreadyUsed,
    NotAWord,
    ValidNonTheme,
    ThemeWord,
    Spangram,
}

impl Verdict {
    /// Only a fresh, real, non-theme word costs a mistake
    #[must_use]
    pub const fn is_mistake(self) -> bool {
        matches!(self, Self::ValidNonTheme)
    }

    #[must_use]
    pub const fn is_solution(self) -> bool {
        matches!(self, Self::ThemeWord | Self::Spangram)
    }

    /// Transient message for rejected submissions
    #[must_use]
    pub const fn rejection_message(self) -> Option<&'static str> {
        match self {
            Self::TooShort => Some("Too short..."),
            Self::AlreadyUsed => Some("Word already found..."),
            Self::NotAWord => Some("Not a word..."),
            Self::ValidNonTheme => Some("Not a theme word..."),
            Self::ThemeWord | Self::Spangram => None,
        }
    }
}

/// Classify `word` and record it as used once it is known to be real
///
/// Solution words count as real even if the oracle does not know them.
///
/// # Examples
/// ```
/// use strands::game::{GameState, Verdict, classify};
/// use strands::wordlists::Dictionary;
///
/// let puzzle = strands::puzzle::builtin().unwrap();
/// let oracle = Dictionary::from_words(["real"]);
/// let mut state = GameState::new();
///
/// assert_eq!(classify("IRIS", &mut state, &puzzle, &oracle), Verdict::ThemeWord);
/// assert_eq!(classify("IRIS", &mut state, &puzzle, &oracle), Verdict::AlreadyUsed);
/// assert_eq!(classify("REAL", &mut state, &puzzle, &oracle), Verdict::ValidNonTheme);
/// assert_eq!(classify("QXZV", &mut state, &puzzle, &oracle), Verdict::NotAWord);
/// assert_eq!(classify("IRI", &mut state, &puzzle, &oracle), Verdict::TooShort);
/// ```
pub fn classify<O: WordOracle + ?Sized>(
    word: &str,
    state: &mut GameState,
    puzzle: &Puzzle,
    oracle: &O,
) -> Verdict {
    if word.chars().count() < MIN_WORD_LEN {
        return Verdict::TooShort;
    }

    let lower = word.to_lowercase();
    if state.is_used(&lower) {
        debug!(word = %lower, "Word already used");
        return Verdict::AlreadyUsed;
    }

    let kind = puzzle.kind_of(word);
    if kind.is_none() && !oracle.has(&lower) {
        debug!(word = %lower, "Not in dictionary");
        return Verdict::NotAWord;
    }

    state.mark_used(&lower);

    match kind {
        Some(SolutionKind::Spangram) => Verdict::Spangram,
        Some(SolutionKind::Theme) => Verdict::ThemeWord,
        None => Verdict::ValidNonTheme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::fixtures;
    use crate::wordlists::Dictionary;

    fn oracle() -> Dictionary {
        Dictionary::from_words(["real", "rise", "stair"])
    }

    #[test]
    fn short_words_never_touch_state() {
        let puzzle = fixtures::sample();
        let mut state = GameState::new();
        for word in ["", "R", "RE", "REA"] {
            assert_eq!(
                classify(word, &mut state, &puzzle, &oracle()),
                Verdict::TooShort
            );
        }
        assert_eq!(state, GameState::new());
    }

    #[test]
    fn theme_and_spangram_are_distinguished() {
        let puzzle = fixtures::sample();
        let mut state = GameState::new();
        assert_eq!(
            classify("IRIS", &mut state, &puzzle, &oracle()),
            Verdict::ThemeWord
        );
        assert_eq!(
            classify("STAR", &mut state, &puzzle, &oracle()),
            Verdict::Spangram
        );
    }

    #[test]
    fn solutions_count_as_words_without_oracle() {
        let puzzle = fixtures::sample();
        let mut state = GameState::new();
        let empty = Dictionary::default();
        assert_eq!(
            classify("SIRE", &mut state, &puzzle, &empty),
            Verdict::ThemeWord
        );
    }

    #[test]
    fn every_real_word_is_used_once() {
        let puzzle = fixtures::sample();
        for word in ["IRIS", "STAR", "REAL"] {
            let mut state = GameState::new();
            let first = classify(word, &mut state, &puzzle, &oracle());
            assert_ne!(first, Verdict::AlreadyUsed);
            assert_eq!(
                classify(word, &mut state, &puzzle, &oracle()),
                Verdict::AlreadyUsed,
                "{word} accepted twice"
            );
        }
    }

    #[test]
    fn non_words_are_not_recorded() {
        let puzzle = fixtures::sample();
        let mut state = GameState::new();
        assert_eq!(
            classify("RAEL", &mut state, &puzzle, &oracle()),
            Verdict::NotAWord
        );
        assert!(!state.is_used("rael"));
        // Still rejected as a non-word the second time, not as used
        assert_eq!(
            classify("RAEL", &mut state, &puzzle, &oracle()),
            Verdict::NotAWord
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        let puzzle = fixtures::sample();
        let mut state = GameState::new();
        assert_eq!(
            classify("real", &mut state, &puzzle, &oracle()),
            Verdict::ValidNonTheme
        );
        assert_eq!(
            classify("REAL", &mut state, &puzzle, &oracle()),
            Verdict::AlreadyUsed
        );
        assert_eq!(
            classify("iris", &mut state, &puzzle, &oracle()),
            Verdict::ThemeWord
        );
    }

    #[test]
    fn classify_does_not_count_mistakes() {
        let puzzle = fixtures::sample();
        let mut state = GameState::new();
        let verdict = classify("REAL", &mut state, &puzzle, &oracle());
        assert!(verdict.is_mistake());
        assert_eq!(state.mistake_count(), 0);
    }
}
