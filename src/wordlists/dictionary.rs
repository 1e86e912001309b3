//! Dictionary oracle
//!
//! The game only needs to ask "is this a word?". A [`DictionaryHandle`]
//! answers from the embedded fallback list until a full dictionary finishes
//! loading on a background thread, then switches over without blocking.

use super::{FALLBACK, loader};
use crate::puzzle::Puzzle;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::thread;
use tracing::{info, warn};

/// Anything that can answer word-validity queries
pub trait WordOracle {
    /// Is `word` a real word? Case-insensitive.
    fn has(&self, word: &str) -> bool;
}

/// An in-memory set of lower-case words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from raw words, normalizing each one
    ///
    /// # Examples
    /// ```
    /// use strands::wordlists::{Dictionary, WordOracle};
    ///
    /// let dict = Dictionary::from_words(["Real", "amen", "no"]);
    /// assert!(dict.has("REAL"));
    /// assert!(!dict.has("no")); // shorter than four letters
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .filter_map(|w| loader::normalize(w.as_ref()))
                .collect(),
        }
    }

    /// The embedded fallback list
    #[must_use]
    pub fn fallback() -> Self {
        Self::from_words(FALLBACK)
    }

    /// Make every solution word of `puzzle` a member
    #[must_use]
    pub fn with_solutions(mut self, puzzle: &Puzzle) -> Self {
        self.words
            .extend(puzzle.solutions().iter().map(|s| s.word.to_lowercase()));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl WordOracle for Dictionary {
    fn has(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

/// A dictionary that may still be loading
///
/// Cloning shares the same underlying slot, so every clone observes the
/// dictionary once the loader thread publishes it.
#[derive(Debug, Clone)]
pub struct DictionaryHandle {
    resolved: Arc<OnceLock<Dictionary>>,
    fallback: Arc<Dictionary>,
}

impl DictionaryHandle {
    /// A handle that is already resolved
    #[must_use]
    pub fn ready(dictionary: Dictionary) -> Self {
        let resolved = OnceLock::new();
        let _ = resolved.set(dictionary);
        Self {
            resolved: Arc::new(resolved),
            fallback: Arc::new(Dictionary::default()),
        }
    }

    /// A handle that answers from `fallback` and never resolves
    #[must_use]
    pub fn fallback_only(fallback: Dictionary) -> Self {
        Self {
            resolved: Arc::new(OnceLock::new()),
            fallback: Arc::new(fallback),
        }
    }

    /// Start loading `path` on a background thread
    ///
    /// Until the load completes, and forever if it fails, lookups are answered
    /// by the embedded fallback list. Solution words of `puzzle` are members of
    /// both.
    #[must_use]
    pub fn spawn_load(path: PathBuf, puzzle: &Puzzle) -> Self {
        let handle = Self::fallback_only(Dictionary::fallback().with_solutions(puzzle));
        let slot = Arc::clone(&handle.resolved);
        let solutions = Dictionary::default().with_solutions(puzzle);

        let spawned = thread::Builder::new()
            .name("dictionary-loader".to_string())
            .spawn(move || match loader::load_from_file(&path) {
                Ok(words) => {
                    let mut dictionary = Dictionary::from_words(words);
                    dictionary.words.extend(solutions.words);
                    info!(
                        path = %path.display(),
                        words = dictionary.len(),
                        "Dictionary loaded"
                    );
                    let _ = slot.set(dictionary);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to load dictionary, using fallback");
                }
            });

        if let Err(e) = spawned {
            warn!(error = %e, "Could not start dictionary loader, using fallback");
        }

        handle
    }

    /// Has the full dictionary been published?
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// The dictionary currently answering lookups
    #[must_use]
    pub fn current(&self) -> &Dictionary {
        self.resolved.get().unwrap_or(&self.fallback)
    }
}

impl WordOracle for DictionaryHandle {
    fn has(&self, word: &str) -> bool {
        self.current().has(word)
    }
}

impl<T: WordOracle + ?Sized> WordOracle for &T {
    fn has(&self, word: &str) -> bool {
        (**self).has(word)
    }
}
