//! Game progress and its persisted form
//!
//! Found words are kept upper-case like the puzzle's solution keys; used words
//! are kept lower-case like the dictionary. The persisted snapshot uses the same
//! normalization.

use crate::core::Coord;
use crate::puzzle::{Puzzle, SolutionKind};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Progress through one puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    found: FxHashSet<String>,
    used_words: FxHashSet<String>,
    mistake_count: u32,
    spent_hints: u32,
    active_hint: Option<String>,
}

/// Versionless snapshot written after every mutation
///
/// Missing fields default so older or partial snapshots still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    pub found: Vec<String>,
    pub used_words: Vec<String>,
    pub mistake_count: u32,
    pub spent_hints: u32,
    pub current_hint_word: Option<String>,
}

/// A found solution as it should be drawn: along its canonical path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundConnection {
    pub word: String,
    pub kind: SolutionKind,
    pub cells: Vec<Coord>,
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(&word.to_uppercase())
    }

    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.contains(&word.to_lowercase())
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub const fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    #[must_use]
    pub const fn spent_hints(&self) -> u32 {
        self.spent_hints
    }

    #[must_use]
    pub fn active_hint(&self) -> Option<&str> {
        self.active_hint.as_deref()
    }

    /// Found words, sorted
    #[must_use]
    pub fn found_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.found.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Used words, sorted
    #[must_use]
    pub fn used_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.used_words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Record a dictionary-valid submission. Returns `false` if already used.
    pub fn mark_used(&mut self, word: &str) -> bool {
        self.used_words.insert(word.to_lowercase())
    }

    /// Record a found solution word, retiring the hint if it pointed at it
    pub fn mark_found(&mut self, word: &str) {
        let word = word.to_uppercase();
        if self.active_hint.as_deref() == Some(word.as_str()) {
            self.active_hint = None;
        }
        self.found.insert(word);
    }

    pub fn add_mistake(&mut self) {
        self.mistake_count = self.mistake_count.saturating_add(1);
    }

    pub(crate) fn spend_hint(&mut self) {
        self.spent_hints = self.spent_hints.saturating_add(1);
    }

    pub(crate) fn set_active_hint(&mut self, word: Option<String>) {
        self.active_hint = word.map(|w| w.to_uppercase());
    }

    /// Drop the active hint unless it still points at an unfound word
    ///
    /// Returns `true` if a hint was cleared.
    pub fn release_stale_hint(&mut self) -> bool {
        match &self.active_hint {
            Some(word) if !self.found.contains(word) => false,
            Some(_) => {
                self.active_hint = None;
                true
            }
            None => false,
        }
    }

    /// Found connections in puzzle order, drawn along canonical paths
    #[must_use]
    pub fn found_connections(&self, puzzle: &Puzzle) -> Vec<FoundConnection> {
        puzzle
            .solutions()
            .iter()
            .filter(|s| self.found.contains(&s.word))
            .map(|s| FoundConnection {
                word: s.word.clone(),
                kind: s.kind,
                cells: s.path.clone(),
            })
            .collect()
    }

    /// Cells of the hinted word, if a hint is active
    #[must_use]
    pub fn hint_cells<'p>(&self, puzzle: &'p Puzzle) -> Option<&'p [Coord]> {
        self.active_hint
            .as_deref()
            .and_then(|word| puzzle.solution(word))
            .map(|s| s.path.as_slice())
    }

    /// Snapshot for persistence, with deterministic ordering
    #[must_use]
    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            found: self.found_words().into_iter().map(str::to_string).collect(),
            used_words: self.used_words().into_iter().map(str::to_string).collect(),
            mistake_count: self.mistake_count,
            spent_hints: self.spent_hints,
            current_hint_word: self.active_hint.clone(),
        }
    }

    /// Rebuild state from a snapshot, repairing anything inconsistent with `puzzle`
    ///
    /// Unknown found words are dropped, spent hints are capped at the number
    /// earned, and a hint that is unknown, the spangram, or already found is
    /// cleared.
    #[must_use]
    pub fn restore(snapshot: PersistedState, puzzle: &Puzzle) -> Self {
        let mut found = FxHashSet::default();
        for word in snapshot.found {
            let word = word.to_uppercase();
            if puzzle.is_solution(&word) {
                found.insert(word);
            } else {
                warn!(word = %word, "Dropping unknown found word from saved state");
            }
        }

        let used_words = snapshot
            .used_words
            .iter()
            .map(|w| w.to_lowercase())
            .collect();

        let earned = super::hints::hints_earned(snapshot.mistake_count);
        let spent_hints = if snapshot.spent_hints > earned {
            warn!(
                spent = snapshot.spent_hints,
                earned, "Saved state spent more hints than earned"
            );
            earned
        } else {
            snapshot.spent_hints
        };

        let active_hint = snapshot
            .current_hint_word
            .map(|w| w.to_uppercase())
            .filter(|word| {
                let valid = puzzle.kind_of(word) == Some(SolutionKind::Theme)
                    && !found.contains(word);
                if !valid {
                    warn!(word = %word, "Dropping invalid hint from saved state");
                }
                valid
            });

        Self {
            found,
            used_words,
            mistake_count: snapshot.mistake_count,
            spent_hints,
            active_hint,
        }
    }
}
