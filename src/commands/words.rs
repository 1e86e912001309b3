//! Grid word search
//!
//! Enumerates every dictionary word that can be traced through the grid.
//! Each start cell is searched on its own rayon task with a depth-first walk
//! pruned by a prefix set.

use crate::core::{Coord, Grid};
use crate::puzzle::{MIN_WORD_LEN, Puzzle, SolutionKind};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};
use tracing::debug;

/// A dictionary word traceable through the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWord {
    pub word: String,
    /// First path in coordinate order that spells the word
    pub path: Vec<Coord>,
    /// Set when the word is one of the puzzle's solutions
    pub kind: Option<SolutionKind>,
}

/// Outcome of a grid word search
#[derive(Debug, Clone)]
pub struct WordSearchResult {
    /// Longest words first, ties alphabetical
    pub words: Vec<GridWord>,
    /// Distinct words found before any limit was applied
    pub total_found: usize,
    pub duration: Duration,
}

impl WordSearchResult {
    #[must_use]
    pub fn solutions_found(&self) -> usize {
        self.words.iter().filter(|w| w.kind.is_some()).count()
    }
}

/// Upper-case words plus every proper prefix of them
struct PrefixIndex {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl PrefixIndex {
    fn new(dictionary: &Dictionary, max_len: usize) -> Self {
        let mut words = FxHashSet::default();
        let mut prefixes = FxHashSet::default();
        for word in dictionary.iter().filter(|w| w.len() <= max_len) {
            let word = word.to_uppercase();
            for end in 1..word.len() {
                prefixes.insert(word[..end].to_string());
            }
            words.insert(word);
        }
        Self { words, prefixes }
    }
}

type Hits = FxHashMap<String, Vec<Coord>>;

/// Find every dictionary word traceable in `puzzle`'s grid
///
/// `limit` caps how many words are returned, longest first.
#[must_use]
pub fn find_words(
    puzzle: &Puzzle,
    dictionary: &Dictionary,
    limit: Option<usize>,
    show_progress: bool,
) -> WordSearchResult {
    let start = Instant::now();
    let grid = puzzle.grid();
    let index = PrefixIndex::new(dictionary, grid.rows() * grid.cols());
    let starts: Vec<Coord> = grid.coords().collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(starts.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} cells | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let hits = starts
        .par_iter()
        .map(|&cell| {
            let mut hits = Hits::default();
            let mut path = vec![cell];
            let mut word = String::new();
            if let Some(letter) = grid.letter(cell) {
                word.push(letter);
                walk(grid, &index, &mut path, &mut word, &mut hits);
            }
            pb.inc(1);
            pb.set_message(format!("{} from {cell}", hits.len()));
            hits
        })
        .reduce(Hits::default, merge);

    pb.finish_and_clear();

    let total_found = hits.len();
    let mut words: Vec<GridWord> = hits
        .into_iter()
        .map(|(word, path)| GridWord {
            kind: puzzle.kind_of(&word),
            word,
            path,
        })
        .collect();
    words.sort_by(|a, b| b.word.len().cmp(&a.word.len()).then_with(|| a.word.cmp(&b.word)));
    if let Some(limit) = limit {
        words.truncate(limit);
    }

    debug!(total_found, elapsed = ?start.elapsed(), "Grid search finished");

    WordSearchResult {
        words,
        total_found,
        duration: start.elapsed(),
    }
}

fn walk(grid: &Grid, index: &PrefixIndex, path: &mut Vec<Coord>, word: &mut String, hits: &mut Hits) {
    if word.len() >= MIN_WORD_LEN && index.words.contains(word.as_str()) {
        record(hits, word.clone(), path.clone());
    }
    if !index.prefixes.contains(word.as_str()) {
        return;
    }

    let Some(&last) = path.last() else {
        return;
    };
    for next in grid.neighbours(last) {
        if path.contains(&next) {
            continue;
        }
        let Some(letter) = grid.letter(next) else {
            continue;
        };
        path.push(next);
        word.push(letter);
        walk(grid, index, path, word, hits);
        word.pop();
        path.pop();
    }
}

/// Keep the smallest path per word so results do not depend on scheduling
fn record(hits: &mut Hits, word: String, path: Vec<Coord>) {
    hits.entry(word)
        .and_modify(|existing| {
            if path < *existing {
                existing.clone_from(&path);
            }
        })
        .or_insert(path);
}

fn merge(mut a: Hits, b: Hits) -> Hits {
    for (word, path) in b {
        record(&mut a, word, path);
    }
    a
}
